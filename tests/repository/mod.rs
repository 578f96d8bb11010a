mod failure;
mod navigation;
mod profile;
mod queue;
mod user;
