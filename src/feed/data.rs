//! Hardcoded sample content for the mock feed.
//!
//! Everything the Home screen shows comes from these constants. They are
//! defined once and never mutated; image URLs are opaque references handed
//! to the media primitive for placeholder rendering.

/// A named entry in the horizontally scrolling stories strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostAuthor {
    pub username: &'static str,
    pub avatar: &'static str,
}

/// A feed item: author, caption text, and a full-width image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub user: PostAuthor,
    pub text: &'static str,
    pub image: &'static str,
}

pub const LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/0/05/Facebook_Logo_(2019).png";

pub const MY_AVATAR: &str = "https://randomuser.me/api/portraits/men/32.jpg";

pub const COMPOSER_PLACEHOLDER: &str = "Write something here...";

/// Stories strip content, rendered left to right in this order.
pub const STORIES: [Story; 5] = [
    Story {
        name: "Alex",
        image: "https://randomuser.me/api/portraits/men/44.jpg",
    },
    Story {
        name: "Nel",
        image: "https://randomuser.me/api/portraits/women/12.jpg",
    },
    Story {
        name: "Samantha",
        image: "https://randomuser.me/api/portraits/women/68.jpg",
    },
    Story {
        name: "Jhon",
        image: "https://randomuser.me/api/portraits/men/85.jpg",
    },
    Story {
        name: "Nia",
        image: "https://randomuser.me/api/portraits/women/55.jpg",
    },
];

/// The single feed post shown on the Home screen.
pub const SAMPLE_POST: Post = Post {
    user: PostAuthor {
        username: "peter_433",
        avatar: MY_AVATAR,
    },
    text: "Checked one off the bucket list today — made it to London Bridge!",
    image: "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?auto=format&fit=crop&w=800&q=60",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_order_is_fixed() {
        let names: Vec<&str> = STORIES.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Alex", "Nel", "Samantha", "Jhon", "Nia"]);
    }

    #[test]
    fn test_sample_post_content() {
        assert_eq!(SAMPLE_POST.user.username, "peter_433");
        assert_eq!(
            SAMPLE_POST.text,
            "Checked one off the bucket list today — made it to London Bridge!"
        );
        assert!(SAMPLE_POST.image.starts_with("https://"));
    }
}
