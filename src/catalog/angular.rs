use crate::structure::FolderStructure;

pub(super) fn structures() -> Vec<FolderStructure> {
    vec![
        FolderStructure::new(
            "angular",
            "standalone",
            "Angular Standalone",
            "Angular 17+ standalone components without NgModules",
            &[
                "src",
                "src/app",
                "src/app/core",
                "src/app/core/services",
                "src/app/core/guards",
                "src/app/core/interceptors",
                "src/app/shared",
                "src/app/shared/components",
                "src/app/features",
                "src/assets",
                "src/environments",
            ],
        ),
        FolderStructure::new(
            "angular",
            "feature-based",
            "Angular Feature-Based",
            "Feature modules with a core layer and shared UI kit",
            &[
                "src",
                "src/app",
                "src/app/core",
                "src/app/core/services",
                "src/app/core/guards",
                "src/app/core/interceptors",
                "src/app/shared",
                "src/app/shared/components/ui",
                "src/app/shared/pipes",
                "src/app/shared/directives",
                "src/app/features",
                "src/app/features/home",
                "src/app/features/auth",
                "src/app/features/auth/components",
                "src/app/features/auth/models",
                "src/app/features/auth/services",
                "src/app/features/dashboard",
                "src/app/features/profile",
                "src/assets",
                "src/environments",
            ],
        ),
        FolderStructure::new(
            "angular",
            "module-based",
            "Angular Module-Based",
            "Classic NgModule layout with core and shared modules",
            &[
                "src",
                "src/app",
                "src/app/core",
                "src/app/shared",
                "src/app/modules",
                "src/app/modules/home",
                "src/app/modules/admin",
                "src/assets",
                "src/environments",
            ],
        ),
    ]
}
