use anyhow::{Context, Result};
use keymaster_catalog::{GameOptions, OPTION_KEYS};
use std::{fs, path::Path};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Read host options from a JSON file, or fall back to the defaults.
///
/// Keys no catalog recognises are logged at warn level and otherwise ignored.
pub fn load_options(path: Option<&Path>) -> Result<GameOptions> {
    let Some(path) = path else {
        return Ok(GameOptions::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read options from {}", path.display()))?;
    let options = GameOptions::from_json(&raw)
        .with_context(|| format!("failed to parse options in {}", path.display()))?;
    let _ = options.unrecognized_keys(OPTION_KEYS);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(label: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "keymaster-util-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_options(None).unwrap(), GameOptions::default());
    }

    #[test]
    fn options_file_is_parsed() {
        let path = temp_file("options");
        fs::write(&path, r#"{ "melvor_idle_dlc_owned": [] }"#).expect("write options");
        let options = load_options(Some(&path)).unwrap();
        assert_eq!(options.get("melvor_idle_dlc_owned").map(<[String]>::len), Some(0));
    }

    #[test]
    fn misspelt_keys_still_load() {
        let path = temp_file("misspelt");
        fs::write(&path, r#"{ "melvor_idle_dlc_onwed": [] }"#).expect("write options");
        let options = load_options(Some(&path)).unwrap();
        assert_eq!(
            options.unrecognized_keys(OPTION_KEYS),
            vec!["melvor_idle_dlc_onwed".to_string()]
        );
    }

    #[test]
    fn unreadable_file_reports_path() {
        let path = temp_file("missing");
        let err = load_options(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read options"));
    }
}
