#[cfg(test)]
mod tests {
    use crate::resources::{find, list, read, CONFIG_URI, README_URI};
    use serde_json::Value;

    #[test]
    fn test_list_resources() {
        let uris: Vec<&str> = list().iter().map(|d| d.uri).collect();
        assert_eq!(uris, vec![CONFIG_URI, README_URI]);
        assert_eq!(find(README_URI).unwrap().mime_type, "text/markdown");
        assert!(find("sample://status").is_none());
    }

    #[test]
    fn test_read_config() {
        let config: Value = serde_json::from_str(&read(CONFIG_URI).unwrap()).unwrap();
        assert_eq!(config["server_name"], "sample-mcp");
        assert_eq!(config["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(config["tools"].as_array().unwrap().len(), 6);
        assert_eq!(config["tools"][0], "add");
    }

    #[test]
    fn test_read_readme() {
        let readme = read(README_URI).unwrap();
        assert!(readme.starts_with("# sample-mcp"));
        assert!(readme.contains("- `add(a: integer, b: integer) -> integer`: Add two numbers together"));
        assert!(readme.contains("`greet(name: string, greeting: string = \"Hello\") -> string`"));
        assert!(readme.contains("`divide(a: number, b: number) -> number`"));
    }

    #[test]
    fn test_read_unknown() {
        assert_eq!(read("sample://nope"), None);
    }
}
