// HTML rendering. Every page is a plain function from typed values to a
// String; all user-entered data goes through `escape` on the way out.

use crate::forms::{CommentForm, FormErrors, PostForm};
use crate::models::comment::Comment;
use crate::models::post::Post;

const PREVIEW_WORDS: usize = 20;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// First `max_words` whitespace-separated words, with a trailing ellipsis
/// when anything was cut.
pub fn preview(content: &str, max_words: usize) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() <= max_words {
        words.join(" ")
    } else {
        format!("{} ...", words[..max_words].join(" "))
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - miniblog</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn field_error(errors: &FormErrors, field: &str) -> String {
    match errors.get(field) {
        Some(msg) => format!("<p class=\"error\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

fn image_tag(image_url: &Option<String>) -> String {
    match image_url {
        Some(url) => format!("<img src=\"{}\" alt=\"\">\n", escape(url)),
        None => String::new(),
    }
}

pub fn blog_list_page(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Blog</h1>\n<p><a href=\"/create/\">New post</a></p>\n");
    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    }
    for post in posts {
        body.push_str(&format!(
            "<article>\n<h2><a href=\"/blog/{id}/\">{title}</a></h2>\n\
             <p class=\"byline\">by {author} on {published}</p>\n\
             {image}<p>{preview}</p>\n\
             <p><a href=\"/blog/{id}/\">Read</a> | <a href=\"/update/{id}/\">Edit</a> | \
             <a href=\"/delete/{id}/\">Delete</a></p>\n</article>\n",
            id = post.id,
            title = escape(&post.title),
            author = escape(&post.author),
            published = post.published.format(TIME_FORMAT),
            image = image_tag(&post.image_url),
            preview = escape(&preview(&post.content, PREVIEW_WORDS)),
        ));
    }
    layout("Blog", &body)
}

pub fn blog_detail_page(
    post: &Post,
    comments: &[Comment],
    form: &CommentForm,
    errors: &FormErrors,
) -> String {
    let mut body = format!(
        "<h1>{title}</h1>\n<p class=\"byline\">by {author} on {published}</p>\n\
         {image}<div>{content}</div>\n<p><a href=\"/\">Back to list</a></p>\n",
        title = escape(&post.title),
        author = escape(&post.author),
        published = post.published.format(TIME_FORMAT),
        image = image_tag(&post.image_url),
        content = escape(&post.content),
    );

    body.push_str(&format!("<h2>Comments ({})</h2>\n", comments.len()));
    for comment in comments {
        body.push_str(&format!(
            "<div class=\"comment\">\n<p><strong>{name}</strong> on {created}</p>\n<p>{content}</p>\n</div>\n",
            name = escape(&comment.name),
            created = comment.created_at.format(TIME_FORMAT),
            content = escape(&comment.content),
        ));
    }

    body.push_str(&format!(
        "<h2>Add a comment</h2>\n<form method=\"post\" action=\"/blog/{id}/\">\n\
         {name_err}<label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label><br>\n\
         {email_err}<label>Email <input type=\"text\" name=\"email\" value=\"{email}\"></label><br>\n\
         {content_err}<label>Comment <textarea name=\"content\">{content}</textarea></label><br>\n\
         <button type=\"submit\">Submit</button>\n</form>\n",
        id = post.id,
        name_err = field_error(errors, "name"),
        name = escape(&form.name),
        email_err = field_error(errors, "email"),
        email = escape(&form.email),
        content_err = field_error(errors, "content"),
        content = escape(&form.content),
    ));

    layout(&post.title, &body)
}

/// Shared by the create and update screens; `action` is the POST target.
pub fn blog_form_page(heading: &str, action: &str, form: &PostForm, errors: &FormErrors) -> String {
    let body = format!(
        "<h1>{heading}</h1>\n<form method=\"post\" action=\"{action}\">\n\
         {title_err}<label>Title <input type=\"text\" name=\"title\" value=\"{title}\"></label><br>\n\
         {content_err}<label>Content <textarea name=\"content\">{content}</textarea></label><br>\n\
         {author_err}<label>Author <input type=\"text\" name=\"author\" value=\"{author}\"></label><br>\n\
         <label>Image URL <input type=\"text\" name=\"image_url\" value=\"{image_url}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n</form>\n\
         <p><a href=\"/\">Back to list</a></p>\n",
        heading = escape(heading),
        action = escape(action),
        title_err = field_error(errors, "title"),
        title = escape(&form.title),
        content_err = field_error(errors, "content"),
        content = escape(&form.content),
        author_err = field_error(errors, "author"),
        author = escape(&form.author),
        image_url = escape(&form.image_url),
    );
    layout(heading, &body)
}

pub fn confirm_delete_page(post: &Post) -> String {
    let body = format!(
        "<h1>Delete post</h1>\n\
         <p>Are you sure you want to delete \"{title}\" by {author}? \
         All of its comments will be deleted too.</p>\n\
         <form method=\"post\" action=\"/delete/{id}/\">\n\
         <button type=\"submit\">Yes, delete</button>\n</form>\n\
         <p><a href=\"/\">Cancel</a></p>\n",
        title = escape(&post.title),
        author = escape(&post.author),
        id = post.id,
    );
    layout("Delete post", &body)
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        "<h1>Not found</h1>\n<p>That post does not exist.</p>\n<p><a href=\"/\">Back to list</a></p>\n",
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server error",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>\n",
    )
}
