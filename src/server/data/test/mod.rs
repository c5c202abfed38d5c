mod issue;
mod project;
mod task;
mod user;
