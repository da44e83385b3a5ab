use crate::structure::FolderStructure;

pub(super) fn structures() -> Vec<FolderStructure> {
    vec![
        FolderStructure::new(
            "vue",
            "composition-api",
            "Vue 3 Composition API",
            "Vue 3 with composables and Pinia stores",
            &[
                "src",
                "src/assets",
                "src/components",
                "src/composables",
                "src/router",
                "src/stores",
                "src/views",
                "src/utils",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "vue",
            "nuxt3",
            "Nuxt 3",
            "Nuxt 3 with file-based routing and server routes",
            &[
                "assets",
                "components",
                "composables",
                "layouts",
                "middleware",
                "pages",
                "plugins",
                "public",
                "server",
                "server/api",
                "server/middleware",
                "stores",
                "utils",
            ],
        )
        .with_id("nuxt3-app-router"),
        FolderStructure::new(
            "vue",
            "options-api",
            "Vue Options API",
            "Classic Vue layout with mixins and a Vuex store",
            &[
                "src",
                "src/assets",
                "src/components",
                "src/mixins",
                "src/router",
                "src/store",
                "src/store/modules",
                "src/views",
                "public",
                "tests",
            ],
        ),
        FolderStructure::new(
            "vue",
            "feature-based",
            "Vue Feature-Based",
            "Vue 3 organized by feature modules",
            &[
                "src",
                "src/app",
                "src/features/auth/components",
                "src/features/auth/composables",
                "src/features/auth/stores",
                "src/features/home/components",
                "src/shared/components",
                "src/shared/composables",
                "src/shared/utils",
                "src/router",
                "public",
                "tests",
            ],
        ),
    ]
}
