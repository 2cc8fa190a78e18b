use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{academy, admin, auth, badge, campaign, forum, mission, payment, profile},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // Self-service profile
        .route("/api/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/api/profile/badges", get(badge::get_profile_badges))
        .route("/api/profile/payments", get(payment::get_payments))
        // Academy (member)
        .route("/api/academy/modules", get(academy::get_modules))
        .route(
            "/api/academy/modules/{module_id}/lessons",
            get(academy::get_module_lessons),
        )
        .route(
            "/api/academy/lessons/{lesson_id}/complete",
            post(academy::complete_lesson),
        )
        // Badges and missions
        .route("/api/badges", get(badge::get_badges))
        .route("/api/missions", get(mission::get_missions))
        .route("/api/missions/toggle", post(mission::toggle_mission))
        // Forum
        .route("/api/forum/posts", get(forum::get_posts).post(forum::create_post))
        .route(
            "/api/forum/posts/{post_id}",
            put(forum::update_post).delete(forum::delete_post),
        )
        // Payments
        .route("/api/payments/mollie", post(payment::create_mollie_payment))
        .route("/api/webhooks/stripe", post(payment::stripe_webhook))
        .route("/api/webhooks/mollie", post(payment::mollie_webhook))
        // Admin
        .route("/api/admin/profiles", get(admin::get_profiles))
        .route("/api/admin/profiles/{profile_id}", put(admin::update_profile))
        .route(
            "/api/admin/academy/modules",
            get(academy::get_all_modules).post(academy::create_module),
        )
        .route(
            "/api/admin/academy/modules/{module_id}",
            put(academy::update_module).delete(academy::delete_module),
        )
        .route(
            "/api/admin/academy/modules/{module_id}/lessons",
            get(academy::get_lessons).post(academy::create_lesson),
        )
        .route(
            "/api/admin/academy/modules/{module_id}/lessons/{lesson_id}",
            put(academy::update_lesson).delete(academy::delete_lesson),
        )
        .route(
            "/api/admin/campaigns",
            get(campaign::get_campaigns).post(campaign::create_campaign),
        )
}
