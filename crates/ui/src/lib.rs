pub fn module_ready() -> bool {
    true
}

pub fn index_html() -> &'static str {
    include_str!("../static/index.html")
}

pub fn styles_css() -> &'static str {
    include_str!("../static/styles.css")
}

pub fn app_js() -> &'static str {
    include_str!("../static/app.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_bundle_contains_index_html() {
        let html = index_html();

        assert!(html.contains("<!doctype html>"));
        assert!(html.contains("/static/styles.css"));
        assert!(html.contains("/static/app.js"));
    }

    #[test]
    fn ui_shell_binds_every_input_and_output() {
        let html = index_html();

        for id in [
            "capacityInput",
            "daysInput",
            "opexInput",
            "capacityVal",
            "daysVal",
            "opexVal",
            "netPerBarrel",
            "monthlyNet",
            "investorShare",
            "financialChart",
            "resetBtn",
            "mobile-menu-btn",
            "mobile-menu",
        ] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[test]
    fn sliders_start_at_page_defaults() {
        let html = index_html();

        assert!(html.contains(r#"id="capacityInput" type="range" min="500" max="3000" step="50" value="1200""#));
        assert!(html.contains(r#"id="daysInput" type="range" min="15" max="30" step="1" value="24""#));
        assert!(html.contains(r#"id="opexInput" type="range" min="20" max="55" step="1" value="40""#));
    }

    #[test]
    fn script_talks_to_simulation_routes() {
        let js = app_js();

        assert!(js.contains("/api/simulation?"));
        assert!(js.contains("/api/simulation/reset"));
        assert!(styles_css().contains(".stressed"));
    }
}
