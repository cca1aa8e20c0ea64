//! Java source emission for validated class models.
//!
//! Rendering is deterministic: identical models yield byte-identical text,
//! so generated sources can be snapshot-tested. The output ordering is part
//! of the contract: field, then constructor, then one accessor per method in
//! interface declaration order.

#![allow(
    clippy::format_push_string,
    reason = "source templating uses format! for clarity"
)]

use crate::model::{Accessor, ClassModel};
use crate::types::java_string_literal;

/// Renders the complete Java source file for a class model.
#[must_use]
pub fn render_class(model: &ClassModel) -> String {
    let mut out = String::with_capacity(1024);
    let class_name = model.class_name();

    out.push_str(&format!("package {};\n\n", model.package));
    out.push_str("import android.content.Context;\n");
    out.push_str("import android.content.pm.PackageManager;\n");
    out.push_str("import android.os.Bundle;\n\n");
    out.push_str(&format!(
        "public final class {class_name} implements {} {{\n",
        model.interface_name
    ));
    out.push_str("    private Bundle metaData;\n\n");
    push_constructor(&mut out, &class_name);
    for accessor in &model.accessors {
        out.push('\n');
        push_accessor(&mut out, accessor);
    }
    out.push_str("}\n");
    out
}

/// Constructor body: start from an empty bundle, then try to replace it with
/// the application's manifest metadata. Construction never throws; a failed
/// lookup keeps the empty bundle so every accessor falls back to defaults.
fn push_constructor(out: &mut String, class_name: &str) {
    out.push_str(&format!("    public {class_name}(Context context) {{\n"));
    out.push_str("        this.metaData = new Bundle();\n");
    out.push_str("        try {\n");
    out.push_str("            PackageManager pm = context.getPackageManager();\n");
    out.push_str(
        "            Bundle appMeta = pm.getApplicationInfo(context.getPackageName(),\n",
    );
    out.push_str("                    PackageManager.GET_META_DATA).metaData;\n");
    out.push_str("            if (appMeta != null) {\n");
    out.push_str("                this.metaData = appMeta;\n");
    out.push_str("            }\n");
    out.push_str("        } catch (PackageManager.NameNotFoundException ignored) {\n");
    out.push_str("            // if we can't get metadata we'll use default config\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
}

fn push_accessor(out: &mut String, accessor: &Accessor) {
    out.push_str("    @Override\n");
    out.push_str(&format!(
        "    public {} {}() {{\n",
        accessor.returns, accessor.method_name
    ));
    out.push_str(&format!(
        "        return metaData.{}({}, {});\n",
        accessor.config_type.bundle_getter(),
        java_string_literal(&accessor.key),
        accessor.default.java_literal()
    ));
    out.push_str("    }\n");
}
