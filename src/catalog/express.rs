use crate::structure::FolderStructure;

pub(super) fn structures() -> Vec<FolderStructure> {
    vec![
        FolderStructure::new(
            "express",
            "layered",
            "Express Layered",
            "Controllers, services and repositories in separate layers",
            &[
                "src",
                "src/config",
                "src/controllers",
                "src/services",
                "src/repositories",
                "src/models",
                "src/middleware",
                "src/routes",
                "src/utils",
                "tests",
            ],
        ),
        FolderStructure::new(
            "express",
            "mvc",
            "Express MVC",
            "Model-View-Controller with server-rendered views",
            &[
                "src",
                "src/controllers",
                "src/models",
                "src/views",
                "src/views/layouts",
                "src/views/partials",
                "src/routes",
                "public/css",
                "public/js",
                "tests",
            ],
        ),
        FolderStructure::new(
            "express",
            "feature-based",
            "Express Feature-Based",
            "Each feature owns its controllers, services, models and routes",
            &[
                "src",
                "src/features",
                "src/features/auth",
                "src/features/auth/controllers",
                "src/features/auth/services",
                "src/features/auth/models",
                "src/features/auth/routes",
                "src/features/users",
                "src/features/users/controllers",
                "src/features/users/services",
                "src/features/products",
                "src/features/products/controllers",
                "src/shared",
                "src/shared/middleware",
                "src/shared/utils",
                "tests",
            ],
        ),
    ]
}
