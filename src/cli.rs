use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "model-compare",
    version,
    about = "Ask ChatGPT or Groq from the terminal, keep every answer, and compare the latest two"
)]
pub struct Cli {
    /// OpenAI API key used for the ChatGPT option
    #[arg(long = "openai-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_key: Option<String>,

    /// Groq API key used for the Groq option
    #[arg(long = "groq-key", env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_key: Option<String>,

    /// Model identifier sent to OpenAI
    #[arg(long = "openai-model", env = "OPENAI_MODEL")]
    pub openai_model: Option<String>,

    /// Model identifier sent to Groq
    #[arg(long = "groq-model", env = "GROQ_MODEL")]
    pub groq_model: Option<String>,

    /// Base URL of the OpenAI API
    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Base URL of the Groq API
    #[arg(long = "groq-base-url", env = "GROQ_BASE_URL")]
    pub groq_base_url: Option<String>,

    /// JSON file every answer is appended to
    #[arg(
        long = "responses-file",
        env = "MODEL_COMPARE_RESPONSES_FILE",
        default_value = "responses.json"
    )]
    pub responses_file: String,

    /// Log file receiving one line per answer
    #[arg(
        long = "log-file",
        env = "MODEL_COMPARE_LOG_FILE",
        default_value = "responses.log"
    )]
    pub log_file: String,

    /// Sampling temperature forwarded to both vendors
    #[arg(long = "temperature")]
    pub temperature: Option<f64>,
}
