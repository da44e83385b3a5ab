//! Built-in folder structures, grouped by framework.

use crate::structure::FolderStructure;

mod angular;
mod express;
mod nextjs;
mod react;
mod vue;

/// Every built-in structure in registration order.
pub fn builtin() -> Vec<FolderStructure> {
    let mut all = Vec::new();
    all.extend(react::structures());
    all.extend(vue::structures());
    all.extend(nextjs::structures());
    all.extend(angular::structures());
    all.extend(express::structures());
    all
}

/// Human-readable name for a framework key; unknown keys are returned as-is.
pub fn framework_display_name(framework: &str) -> &str {
    match framework {
        "react" => "React",
        "vue" => "Vue",
        "nextjs" => "Next.js",
        "angular" => "Angular",
        "express" => "Express",
        other => other,
    }
}
