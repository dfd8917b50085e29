//! Askama templates for the info page.

use askama::Template;

/// Landing page describing the API.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Station display name.
    pub station: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_renders_station_name() {
        let html = IndexTemplate {
            station: "Queens Park Stn".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Queens Park Stn"));
        assert!(html.contains("/api/departures"));
        assert!(html.contains("/api/health"));
    }
}
