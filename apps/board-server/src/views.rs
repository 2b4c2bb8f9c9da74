//! Askama templates for the board pages.
//!
//! Templates live under `templates/` and escape every interpolated value.

use askama::Template;

use board_core::domain::{Post, PostInput};
use board_core::pagination::Page;
use board_core::validation::{Field, MAX_AUTHOR_CHARS, MAX_TITLE_CHARS, ValidationErrors};

/// Which form is being rendered, and where it submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// A post as shown in the list and on its own page.
#[derive(Debug)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            created: post.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// The paginated post list.
#[derive(Template)]
#[template(path = "board-list.html")]
pub struct BoardListTemplate {
    pub posts: Vec<PostView>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl From<&Page<Post>> for BoardListTemplate {
    fn from(page: &Page<Post>) -> Self {
        Self {
            posts: page.items.iter().map(PostView::from).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages().max(1),
            prev_page: page.has_prev().then(|| page.prev_page()),
            next_page: page.has_next().then(|| page.next_page()),
        }
    }
}

/// A single post, or the "not found" page when `post` is `None`.
#[derive(Template)]
#[template(path = "board-detail.html")]
pub struct BoardDetailTemplate {
    pub post: Option<PostView>,
}

impl BoardDetailTemplate {
    pub fn found(post: &Post) -> Self {
        Self {
            post: Some(PostView::from(post)),
        }
    }

    pub fn not_found() -> Self {
        Self { post: None }
    }
}

/// The create or edit form, with any field errors next to their inputs.
#[derive(Template)]
#[template(path = "board-form.html")]
pub struct BoardFormTemplate {
    pub edit_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub title_error: Option<&'static str>,
    pub content_error: Option<&'static str>,
    pub author_error: Option<&'static str>,
    pub global_error: Option<&'static str>,
    pub max_title_chars: usize,
    pub max_author_chars: usize,
}

impl BoardFormTemplate {
    pub fn new(mode: FormMode, values: &PostInput) -> Self {
        let edit_id = match mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        };

        Self {
            edit_id,
            title: values.title.clone(),
            content: values.content.clone(),
            author: values.author.clone(),
            title_error: None,
            content_error: None,
            author_error: None,
            global_error: None,
            max_title_chars: MAX_TITLE_CHARS,
            max_author_chars: MAX_AUTHOR_CHARS,
        }
    }

    /// Re-render what the user submitted together with the field errors.
    pub fn rejected(mode: FormMode, errors: &ValidationErrors) -> Self {
        Self {
            title_error: errors.get(Field::Title),
            content_error: errors.get(Field::Content),
            author_error: errors.get(Field::Author),
            ..Self::new(mode, errors.values())
        }
    }

    pub fn with_global_error(mut self, message: &'static str) -> Self {
        self.global_error = Some(message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::PageRequest;
    use board_core::validation::validate_post_input;
    use chrono::{TimeZone, Utc};

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: "line one\nline two".to_string(),
            author: "kim".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_detail_escapes_user_content() {
        let html = BoardDetailTemplate::found(&post(3, "<script>alert(1)</script>"))
            .render()
            .unwrap();

        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("2024-05-01 09:30:00 UTC"));
        assert!(html.contains("href=\"/board/list/3/edit\""));
    }

    #[test]
    fn test_missing_post_renders_not_found() {
        let html = BoardDetailTemplate::not_found().render().unwrap();
        assert!(html.contains("<h1>Post not found</h1>"));
    }

    #[test]
    fn test_list_navigation_links() {
        let request = PageRequest::from_query(Some("2"), Some("10"));
        let page = Page::new(vec![post(11, "eleven")], 35, request);
        let html = BoardListTemplate::from(&page).render().unwrap();

        assert!(html.contains("href=\"/board/list/11\""));
        assert!(html.contains("page=1&amp;pageSize=10"));
        assert!(html.contains("page=3&amp;pageSize=10"));
        assert!(html.contains("35 posts"));
    }

    #[test]
    fn test_empty_list_has_no_navigation() {
        let page: Page<Post> = Page::new(Vec::new(), 0, PageRequest::default());
        let html = BoardListTemplate::from(&page).render().unwrap();

        assert!(html.contains("No posts yet."));
        assert!(html.contains("page 1 of 1"));
        assert!(!html.contains("rel=\"prev\""));
        assert!(!html.contains("rel=\"next\""));
    }

    #[test]
    fn test_form_shows_field_errors_and_values() {
        let errors = validate_post_input(Some("<b>kept</b>"), None, Some("me")).unwrap_err();
        let html = BoardFormTemplate::rejected(FormMode::Edit(4), &errors)
            .render()
            .unwrap();

        assert!(html.contains("action=\"/board/list/4/edit\""));
        assert!(html.contains("value=\"&lt;b&gt;kept"));
        assert!(!html.contains("<b>kept"));
        assert!(html.contains("Please enter the content."));
        assert!(!html.contains("Please enter a title."));
    }

    #[test]
    fn test_create_form_with_global_error() {
        let html = BoardFormTemplate::new(FormMode::Create, &PostInput::new("t", "c", "a"))
            .with_global_error("Try again.")
            .render()
            .unwrap();

        assert!(html.contains("action=\"/board\""));
        assert!(html.contains("<h1>New post</h1>"));
        assert!(html.contains("<p class=\"error\">Try again.</p>"));
    }
}
