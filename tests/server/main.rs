mod actions_api;
mod image_api;
