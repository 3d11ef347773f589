use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PylintMdConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

fn default_program() -> String {
    "pylint".to_string()
}

fn default_args() -> Vec<String> {
    vec![
        "-f".to_string(),
        "json".to_string(),
        "--persistent=n".to_string(),
        "--score=y".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub include_hidden: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            include_hidden: false,
        }
    }
}

fn default_extension() -> String {
    "py".to_string()
}
