//! Entry template rendering

use crate::domain::value_objects::ImportPath;

/// Token replaced by the quoted component import in the entry template.
pub const ENTRY_PLACEHOLDER: &str = "SKELETON_ENTRY_RELATIVE_PATH";

/// Substitute the first placeholder occurrence with the quoted import.
///
/// Returns `None` when the template has no placeholder.
pub fn render_entry(template: &str, import: &ImportPath) -> Option<String> {
    template.contains(ENTRY_PLACEHOLDER).then(|| {
        template.replacen(ENTRY_PLACEHOLDER, &import.quoted(), 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const TEMPLATE: &str = "import Vue from 'vue';\nimport Skeleton from SKELETON_ENTRY_RELATIVE_PATH;\n\nexport default () => new Vue({ render: h => h(Skeleton) });\n";

    fn import(to: &str) -> ImportPath {
        ImportPath::between(Path::new("/proj/.skeleton"), Path::new(to))
    }

    #[test]
    fn substitutes_quoted_import() {
        let out = render_entry(TEMPLATE, &import("/proj/src/Skeleton.vue")).unwrap();
        insta::assert_snapshot!(out.trim_end(), @r"
        import Vue from 'vue';
        import Skeleton from '../src/Skeleton.vue';

        export default () => new Vue({ render: h => h(Skeleton) });
        ");
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let tpl = "a(SKELETON_ENTRY_RELATIVE_PATH); // SKELETON_ENTRY_RELATIVE_PATH";
        let out = render_entry(tpl, &import("/proj/.skeleton/x.vue")).unwrap();
        assert_eq!(out, "a('./x.vue'); // SKELETON_ENTRY_RELATIVE_PATH");
    }

    #[test]
    fn missing_placeholder_is_rejected() {
        assert!(render_entry("export default {}", &import("/proj/x.vue")).is_none());
    }

    #[test]
    fn rendering_is_deterministic_per_source() {
        let a = render_entry(TEMPLATE, &import("/proj/a/One.vue")).unwrap();
        let b = render_entry(TEMPLATE, &import("/proj/b/Two.vue")).unwrap();
        assert!(a.contains("'../a/One.vue'"));
        assert!(b.contains("'../b/Two.vue'"));
        assert!(!b.contains("One.vue"));
    }
}
