use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// Path of the JSON data file backing the key-value store.
    pub data_file: String,

    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,

    pub morning_session_points: i64,
    pub journal_entry_points: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "sprout-data.json".into()),

            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_else(|_| String::new()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".into()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),

            morning_session_points: env::var("MORNING_SESSION_POINTS")
                .unwrap_or_else(|_| "3".into())
                .parse()
                .unwrap_or(3),
            journal_entry_points: env::var("JOURNAL_ENTRY_POINTS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .unwrap_or(5),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            data_file: "sprout-data.json".into(),
            openai_api_key: String::new(),
            openai_model: "gpt-4o".into(),
            openai_base_url: "https://api.openai.com/v1".into(),
            morning_session_points: 3,
            journal_entry_points: 5,
        }
    }
}
