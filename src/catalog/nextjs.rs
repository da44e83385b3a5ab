use crate::structure::FolderStructure;

pub(super) fn structures() -> Vec<FolderStructure> {
    vec![
        FolderStructure::new(
            "nextjs",
            "app-router",
            "Next.js App Router",
            "Next.js 13+ App Router with route groups and API routes",
            &[
                "src",
                "src/app",
                "src/app/(auth)",
                "src/app/(auth)/login",
                "src/app/(dashboard)",
                "src/app/api",
                "src/components",
                "src/components/ui",
                "src/hooks",
                "src/lib",
                "src/styles",
                "src/types",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "nextjs",
            "pages-router",
            "Next.js Pages Router",
            "Classic Next.js layout with the pages directory",
            &[
                "src",
                "src/pages",
                "src/pages/api",
                "src/components",
                "src/hooks",
                "src/lib",
                "src/styles",
                "src/types",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "nextjs",
            "feature-based",
            "Next.js Feature-Based",
            "App Router with code grouped into feature modules",
            &[
                "src",
                "src/app",
                "src/app/api",
                "src/features/auth/components",
                "src/features/auth/hooks",
                "src/features/auth/services",
                "src/features/dashboard/components",
                "src/shared/components",
                "src/shared/lib",
                "src/shared/types",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "nextjs",
            "monorepo",
            "Next.js Monorepo",
            "Turborepo-style workspace with Next.js apps and shared packages",
            &[
                "apps",
                "apps/web/src/app",
                "apps/docs/src/app",
                "packages",
                "packages/ui/src",
                "packages/config",
                "packages/tsconfig",
            ],
        ),
    ]
}
