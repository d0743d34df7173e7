use std::io::ErrorKind;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no system monitor found (tried: {})", .0.join(", "))]
    NoneAvailable(Vec<String>),
    #[error("failed to start {app}: {source}")]
    Spawn {
        app: String,
        #[source]
        source: std::io::Error,
    },
}

/// Starts the first available application in `candidates`, returning its name.
/// Missing executables fall through to the next candidate; any other spawn
/// failure is reported immediately.
pub fn launch_monitor(candidates: &[String]) -> Result<String, LaunchError> {
    for app in candidates {
        let spawned = Command::new(app)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_child) => {
                tracing::info!(app = %app, "system monitor started");
                return Ok(app.clone());
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(app = %app, "system monitor not installed");
            }
            Err(source) => {
                return Err(LaunchError::Spawn {
                    app: app.clone(),
                    source,
                });
            }
        }
    }
    Err(LaunchError::NoneAvailable(candidates.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_missing_reports_candidates() {
        let candidates = vec![
            "ramswap-no-such-monitor-a".to_string(),
            "ramswap-no-such-monitor-b".to_string(),
        ];
        let err = launch_monitor(&candidates).unwrap_err();
        assert!(matches!(err, LaunchError::NoneAvailable(ref tried) if tried.len() == 2));
        assert!(err.to_string().contains("ramswap-no-such-monitor-b"));
    }

    #[test]
    fn empty_candidate_list() {
        assert!(matches!(
            launch_monitor(&[]),
            Err(LaunchError::NoneAvailable(tried)) if tried.is_empty()
        ));
    }

    #[cfg(unix)]
    #[test]
    fn falls_back_to_next_candidate() {
        let candidates = vec!["ramswap-no-such-monitor".to_string(), "true".to_string()];
        assert_eq!(launch_monitor(&candidates).unwrap(), "true");
    }
}
