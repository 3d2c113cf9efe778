pub mod blog_handlers;
