use askama::Template;

use super::AdminLayout;
use crate::application::admin::{Confirmation, DisplayedViews};
use crate::domain::{
    entities::BlogPost,
    posts::display_date,
    types::{BLOG_CATEGORIES, BlogStatus},
};

#[derive(Clone)]
pub struct AdminBlogRowView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date_label: String,
    pub status_key: &'static str,
    pub status_label: &'static str,
    pub image: String,
    pub edit_href: String,
    pub delete_action: String,
}

impl From<&BlogPost> for AdminBlogRowView {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            date_label: display_date(&post.date),
            status_key: post.status.as_str(),
            status_label: post.status.label(),
            image: post.image.clone(),
            edit_href: format!("/blogs/{}/edit", post.id),
            delete_action: format!("/blogs/{}/delete", post.id),
        }
    }
}

#[derive(Clone)]
pub struct AdminBlogListView {
    pub heading: String,
    pub rows: Vec<AdminBlogRowView>,
    pub empty_message: String,
    pub new_blog_href: String,
    pub delete_prompt: &'static str,
}

impl AdminBlogListView {
    pub fn new(posts: &[BlogPost]) -> Self {
        Self {
            heading: "Blog Management".to_string(),
            rows: posts.iter().map(AdminBlogRowView::from).collect(),
            empty_message: "No blog posts yet.".to_string(),
            new_blog_href: "/blogs/new".to_string(),
            delete_prompt: Confirmation::DELETE_PROMPT,
        }
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

#[derive(Clone)]
pub struct AdminOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone)]
pub struct AdminBlogFormView {
    pub form_id: &'static str,
    pub heading: String,
    pub action: String,
    pub submit_label: &'static str,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub categories: Vec<AdminOptionView>,
    pub statuses: Vec<AdminOptionView>,
    pub views: String,
}

impl AdminBlogFormView {
    /// Blank form for a new post.
    pub fn create() -> Self {
        Self {
            form_id: "add-blog-form",
            heading: "Add New Blog".to_string(),
            action: "/blogs/create".to_string(),
            submit_label: "Add Blog",
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            image: String::new(),
            categories: category_options(BLOG_CATEGORIES[0]),
            statuses: status_options(BlogStatus::Published),
            views: String::new(),
        }
    }

    /// Form pre-filled with an existing post. `views` names the panels to refresh on save.
    pub fn edit(post: &BlogPost, views: DisplayedViews) -> Self {
        Self {
            form_id: "edit-blog-form",
            heading: "Edit Blog".to_string(),
            action: format!("/blogs/{}/update", post.id),
            submit_label: "Update Blog",
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            image: post.image.clone(),
            categories: category_options(&post.category),
            statuses: status_options(post.status),
            views: views.field_value(),
        }
    }
}

/// The fixed categories, plus the current one when it is not among them.
fn category_options(current: &str) -> Vec<AdminOptionView> {
    let mut options: Vec<AdminOptionView> = BLOG_CATEGORIES
        .iter()
        .map(|category| AdminOptionView {
            value: (*category).to_string(),
            label: (*category).to_string(),
            selected: *category == current,
        })
        .collect();

    if !current.is_empty() && !BLOG_CATEGORIES.contains(&current) {
        options.push(AdminOptionView {
            value: current.to_string(),
            label: current.to_string(),
            selected: true,
        });
    }
    options
}

fn status_options(current: BlogStatus) -> Vec<AdminOptionView> {
    BlogStatus::ALL
        .iter()
        .map(|status| AdminOptionView {
            value: status.as_str().to_string(),
            label: status.label().to_string(),
            selected: *status == current,
        })
        .collect()
}

#[derive(Clone)]
pub struct AdminBlogEditModalView {
    pub form: AdminBlogFormView,
    pub close_action: String,
}

impl AdminBlogEditModalView {
    pub fn new(post: &BlogPost, views: DisplayedViews) -> Self {
        Self {
            form: AdminBlogFormView::edit(post, views),
            close_action: "/modal/close".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/blogs.html")]
pub struct AdminBlogsTemplate {
    pub view: AdminLayout<AdminBlogListView>,
}

#[derive(Template)]
#[template(path = "admin/blogs_panel.html")]
pub struct AdminBlogsPanelTemplate {
    pub content: AdminBlogListView,
}

#[derive(Template)]
#[template(path = "admin/blog_new.html")]
pub struct AdminBlogNewTemplate {
    pub view: AdminLayout<AdminBlogFormView>,
}

#[derive(Template)]
#[template(path = "admin/blog_form_panel.html")]
pub struct AdminBlogFormPanelTemplate {
    pub content: AdminBlogFormView,
}

#[derive(Template)]
#[template(path = "admin/blog_edit_modal.html")]
pub struct AdminBlogEditModalTemplate {
    pub content: AdminBlogEditModalView,
}
