use std::fmt;
use url::Url;

/// Which comic a fetch asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Latest,
    /// Numbers are sent as-is, including 0 or not-yet-published ones.
    ByNumber(u32),
}

impl Target {
    /// Resolves against a base URL that ends in `/`.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        match self {
            Target::Latest => base.join("info.0.json"),
            Target::ByNumber(n) => base.join(&format!("{n}/info.0.json")),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Latest => f.write_str("latest"),
            Target::ByNumber(n) => write!(f, "#{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://xkcd.com/").unwrap()
    }

    #[test]
    fn latest_url() {
        assert_eq!(
            Target::Latest.url(&base()).unwrap().as_str(),
            "https://xkcd.com/info.0.json"
        );
    }

    #[test]
    fn numbered_url() {
        assert_eq!(
            Target::ByNumber(614).url(&base()).unwrap().as_str(),
            "https://xkcd.com/614/info.0.json"
        );
        assert_eq!(
            Target::ByNumber(0).url(&base()).unwrap().as_str(),
            "https://xkcd.com/0/info.0.json"
        );
    }

    #[test]
    fn keeps_base_path() {
        let base = Url::parse("http://127.0.0.1:8080/mirror/").unwrap();
        assert_eq!(
            Target::ByNumber(5).url(&base).unwrap().as_str(),
            "http://127.0.0.1:8080/mirror/5/info.0.json"
        );
    }
}
