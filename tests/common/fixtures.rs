//! Reusable test content

pub const SKELETON_COMPONENT: &str = r#"<template>
  <div class="skeleton"><span class="bar"></span></div>
</template>

<style>
.bar { height: 12px; }
</style>
"#;

pub const OTHER_COMPONENT: &str = r#"<template>
  <p class="other-skeleton"></p>
</template>
"#;

/// Stand-in bundler: follows the entry's component import and stores the
/// component itself as the bundle descriptor.
pub const FAKE_BUNDLER: &str = r#"set -e
entry_dir=$(dirname "$SKELETON_ENTRY")
import=$(sed -n "s/^import Skeleton from '\(.*\)';$/\1/p" "$SKELETON_ENTRY")
mkdir -p "$SKELETON_OUTPUT_DIR"
cp "$entry_dir/$import" "$SKELETON_OUTPUT_DIR/$SKELETON_BUNDLE_NAME"
echo "skeleton.js  1 KiB  [emitted]"
"#;

/// Stand-in bundler that always reports a compile error
pub const FAILING_BUNDLER: &str = r#"echo "ERROR in ./src/Broken.vue"
echo "Module build failed: SyntaxError" >&2
exit 2
"#;

/// Stand-in renderer: `$1` is the render script, `$2` the bundle. Emits the
/// component's template body as JSON.
pub const FAKE_RENDERER: &str = r#"body=$(sed -n '/<template>/,/<\/template>/{/template>/d;p;}' "$2" | tr -d '\n' | sed 's/"/\\"/g')
printf '{"html":"%s","styles":""}' "$body"
"#;
