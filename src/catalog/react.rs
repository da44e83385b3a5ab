use crate::structure::FolderStructure;

pub(super) fn structures() -> Vec<FolderStructure> {
    vec![
        FolderStructure::new(
            "react",
            "feature-based",
            "React Feature-Based",
            "Organize code by features with shared components and utilities",
            &[
                "src",
                "src/app",
                "src/features",
                "src/features/auth",
                "src/features/auth/components",
                "src/features/auth/hooks",
                "src/features/auth/services",
                "src/features/home",
                "src/features/home/components",
                "src/shared",
                "src/shared/components",
                "src/shared/hooks",
                "src/shared/utils",
                "src/shared/types",
                "src/assets",
                "src/styles",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "react",
            "component-based",
            "React Component-Based",
            "Traditional layout grouping code by technical role",
            &[
                "src",
                "src/components",
                "src/components/common",
                "src/components/layout",
                "src/pages",
                "src/hooks",
                "src/context",
                "src/services",
                "src/utils",
                "src/assets",
                "src/styles",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "react",
            "atomic-design",
            "React Atomic Design",
            "Components split into atoms, molecules, organisms, templates and pages",
            &[
                "src",
                "src/components",
                "src/components/atoms",
                "src/components/molecules",
                "src/components/organisms",
                "src/components/templates",
                "src/pages",
                "src/hooks",
                "src/services",
                "src/utils",
                "src/styles",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "react",
            "monorepo",
            "React Monorepo",
            "Workspace with multiple apps sharing internal packages",
            &[
                "apps",
                "apps/web/src",
                "apps/admin/src",
                "packages",
                "packages/ui/src",
                "packages/utils/src",
                "packages/config",
                "tools",
            ],
        ),
    ]
}
