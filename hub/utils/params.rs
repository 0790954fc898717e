use std::collections::HashMap;

/// Query parameter as sent, or `default` when absent. Values are forwarded
/// untouched, so an empty or non-numeric value reaches the upstream as is.
pub fn text_param<'a>(params: &'a HashMap<String, String>, key: &str, default: &'a str) -> &'a str {
    params.get(key).map_or(default, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn text_param_defaults_only_when_absent() {
        let p = params(&[("q", "")]);
        assert_eq!(text_param(&p, "q", "technology"), "");
        assert_eq!(text_param(&p, "query", "nature"), "nature");
    }

    #[test]
    fn counts_are_forwarded_verbatim() {
        let p = params(&[("limit", "12"), ("count", "many"), ("pageSize", "-3")]);
        assert_eq!(text_param(&p, "limit", "5"), "12");
        assert_eq!(text_param(&p, "count", "5"), "many");
        assert_eq!(text_param(&p, "pageSize", "5"), "-3");
        assert_eq!(text_param(&p, "max_results", "5"), "5");
    }
}
