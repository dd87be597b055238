use thiserror::Error;

/// Errors raised while binding configuration or validating catalog content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown {option} member \"{key}\" (expected one of: {})", .valid.join(", "))]
    UnknownPack {
        option: &'static str,
        key: String,
        valid: Vec<&'static str>,
    },
    #[error("no catalog for game \"{0}\"")]
    UnknownGame(String),
    #[error("{game} has no pool named \"{pool}\"")]
    UnknownPool { game: &'static str, pool: String },
    #[error("{game}: \"{label}\" references {token} but binds no pool for it")]
    UnboundPlaceholder {
        game: &'static str,
        label: String,
        token: String,
    },
    #[error("{game}: \"{label}\" binds {token} which never appears in the label")]
    UnusedBinding {
        game: &'static str,
        label: String,
        token: String,
    },
    #[error("{game}: pool \"{pool}\" is empty (needed by {token} in \"{label}\")")]
    EmptyPool {
        game: &'static str,
        label: String,
        token: String,
        pool: &'static str,
    },
    #[error(
        "{game}: {token} in \"{label}\" draws {arity} from \"{pool}\" which only has {available}"
    )]
    InsufficientCandidates {
        game: &'static str,
        label: String,
        token: String,
        pool: &'static str,
        arity: u8,
        available: usize,
    },
    #[error("{game}: \"{label}\" has a zero weight")]
    ZeroWeight { game: &'static str, label: String },
    #[error("numeric range step must be non-zero (start {start}, stop {stop})")]
    ZeroStep { start: i64, stop: i64 },
    #[error("weighted buckets need at least one bucket with a positive share")]
    EmptyBuckets,
    #[error("{game} failed validation with {} issue(s)", .issues.len())]
    Validation {
        game: &'static str,
        issues: Vec<CatalogError>,
    },
    #[error("invalid game options: {0}")]
    Options(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Options(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pack_lists_valid_members() {
        let err = CatalogError::UnknownPack {
            option: "melvor_idle_dlc_owned",
            key: "Totally Real DLC".to_string(),
            valid: vec!["Atlas of Discovery", "Throne of the Herald"],
        };
        let message = err.to_string();
        assert!(message.contains("Totally Real DLC"));
        assert!(message.contains("Atlas of Discovery, Throne of the Herald"));
    }

    #[test]
    fn validation_counts_issues() {
        let err = CatalogError::Validation {
            game: "Abyssus",
            issues: vec![
                CatalogError::ZeroWeight {
                    game: "Abyssus",
                    label: "Unlock a charm".to_string(),
                },
                CatalogError::EmptyBuckets,
            ],
        };
        assert_eq!(err.to_string(), "Abyssus failed validation with 2 issue(s)");
    }
}
