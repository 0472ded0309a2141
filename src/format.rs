//! Output formatting for merged config trees.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "yml")]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Render `value`, always ending with a newline.
    pub fn render(self, value: &Value) -> Result<String> {
        let mut out = match self {
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json() {
        let out = OutputFormat::Json.render(&json!({"port": 80})).unwrap();
        assert_eq!(out, "{\n  \"port\": 80\n}\n");
    }

    #[test]
    fn test_render_yaml() {
        let out = OutputFormat::Yaml.render(&json!({"port": 80})).unwrap();
        assert_eq!(out, "port: 80\n");
    }
}
