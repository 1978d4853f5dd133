const ICON_PACKAGE: &str = "@ant-design/icons";

/// JSX usage of an icon component, e.g. `<SmileOutlined />`.
#[must_use]
pub fn usage_snippet(component: &str) -> String {
    format!("<{component} />")
}

#[must_use]
pub fn import_snippet(component: &str) -> String {
    format!("import {{ {component} }} from '{ICON_PACKAGE}';")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_is_self_closing_element() {
        assert_eq!(usage_snippet("SmileOutlined"), "<SmileOutlined />");
    }

    #[test]
    fn import_names_the_icon_package() {
        assert_eq!(
            import_snippet("HeartTwoTone"),
            "import { HeartTwoTone } from '@ant-design/icons';"
        );
    }
}
