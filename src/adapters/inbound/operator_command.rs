//! Line-oriented operator commands read from stdin.

use crate::monitoring::domain::{EventId, Verdict};
use crate::shared::Result;
use anyhow::bail;

/// One parsed operator input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    /// `allow <id>` or `block <id>`
    Action { event_id: EventId, verdict: Verdict },
    Refresh,
    /// Hide the error banner
    Dismiss,
    Quit,
}

impl OperatorCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if words.next().is_some() {
            bail!("Too many arguments: '{}'", line.trim());
        }

        let command = match (keyword.to_lowercase().as_str(), argument) {
            ("allow" | "block", Some(id)) => {
                let verdict = keyword.parse::<Verdict>().map_err(anyhow::Error::msg)?;
                OperatorCommand::Action {
                    event_id: EventId::new(id.to_string())?,
                    verdict,
                }
            }
            ("allow" | "block", None) => bail!("Usage: {} <event-id>", keyword.to_lowercase()),
            ("refresh" | "r", None) => OperatorCommand::Refresh,
            ("dismiss" | "d", None) => OperatorCommand::Dismiss,
            ("quit" | "q" | "exit", None) => OperatorCommand::Quit,
            ("refresh" | "r" | "dismiss" | "d" | "quit" | "q" | "exit", Some(_)) => {
                bail!("'{}' takes no arguments", keyword)
            }
            _ => bail!(
                "Unknown command: '{}'. Expected allow <id>, block <id>, refresh, dismiss or quit",
                keyword
            ),
        };

        Ok(Some(command))
    }
}
