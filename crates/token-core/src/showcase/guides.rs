//! Static platform guides, bundled as Markdown.

use super::{Page, SectionContent};

struct Guide {
    slug: &'static str,
    title: &'static str,
    intro: &'static str,
    body: &'static str,
}

const GUIDES: [Guide; 6] = [
    Guide {
        slug: "guides/css",
        title: "CSS",
        intro: "Custom properties for web projects.",
        body: include_str!("../../guides/css.md"),
    },
    Guide {
        slug: "guides/scss",
        title: "SCSS",
        intro: "Sass variables and maps.",
        body: include_str!("../../guides/scss.md"),
    },
    Guide {
        slug: "guides/android",
        title: "Android",
        intro: "XML color and dimension resources.",
        body: include_str!("../../guides/android.md"),
    },
    Guide {
        slug: "guides/ios",
        title: "iOS",
        intro: "Swift constants.",
        body: include_str!("../../guides/ios.md"),
    },
    Guide {
        slug: "guides/typescript",
        title: "TypeScript",
        intro: "A typed token module.",
        body: include_str!("../../guides/typescript.md"),
    },
    Guide {
        slug: "guides/figma-export",
        title: "Figma Export",
        intro: "Getting tokens out of Figma and into this repository.",
        body: include_str!("../../guides/figma-export.md"),
    },
];

pub fn guide_pages() -> Vec<Page> {
    GUIDES
        .iter()
        .map(|g| {
            let mut page = Page::new(g.slug, g.title, g.intro);
            page.push(None, SectionContent::Markdown(g.body.to_string()));
            page
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guides_are_bundled() {
        let pages = guide_pages();
        assert_eq!(pages.len(), 6);
        for page in &pages {
            assert!(page.slug.starts_with("guides/"));
            match &page.sections[0].content {
                SectionContent::Markdown(body) => assert!(!body.trim().is_empty(), "{}", page.slug),
                other => panic!("Expected markdown, got {:?}", other),
            }
        }
    }
}
