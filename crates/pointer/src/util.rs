use crate::types::PathStep;

/// Escapes a JSON Pointer path component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Format path steps into a JSON Pointer string.
pub fn format_json_pointer(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&step.to_string());
    }
    out
}
