mod academy_lesson;
mod badge;
mod forum_post;
mod lesson_completion;
mod mission;
mod payment;
mod profile;
