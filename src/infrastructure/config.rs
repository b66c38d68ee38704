use std::env;

/// Parameters of the fixed "featured courses" query exposed at
/// `/courses/instructor/courseFee/`
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultCourseQuery {
    pub instructor: String,
    pub min_fee: f64,
}

impl Default for DefaultCourseQuery {
    fn default() -> Self {
        Self {
            instructor: "Sudarshan Shah".to_string(),
            min_fee: 3000.0,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub default_query: DefaultCourseQuery,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = DefaultCourseQuery::default();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://courses.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            default_query: DefaultCourseQuery {
                instructor: env::var("DEFAULT_QUERY_INSTRUCTOR").unwrap_or(defaults.instructor),
                min_fee: env::var("DEFAULT_QUERY_MIN_FEE")
                    .ok()
                    .and_then(|fee| fee.parse().ok())
                    .unwrap_or(defaults.min_fee),
            },
        }
    }
}
