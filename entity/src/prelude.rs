pub use super::academy_lesson::Entity as AcademyLesson;
pub use super::academy_module::Entity as AcademyModule;
pub use super::badge::Entity as Badge;
pub use super::forum_post::Entity as ForumPost;
pub use super::lesson_completion::Entity as LessonCompletion;
pub use super::login_log::Entity as LoginLog;
pub use super::maintenance_run::Entity as MaintenanceRun;
pub use super::mission::Entity as Mission;
pub use super::mission_completion::Entity as MissionCompletion;
pub use super::payment::Entity as Payment;
pub use super::profile::Entity as Profile;
pub use super::user_badge::Entity as UserBadge;
