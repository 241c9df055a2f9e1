use crate::api::{Error, Result};
use crate::model::Profile;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

pub const ATTRIBUTION: &str = "Generated by https://github.com/pydanny/contributors";

const HTML_COLUMNS: usize = 5;

#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Rst,
    #[strum(to_string = "md", serialize = "markdown")]
    Markdown,
    Html,
}

impl Default for Format {
    fn default() -> Self {
        Format::Rst
    }
}

impl Format {
    /// Like `FromStr`, but fails with `Error::UnsupportedFormat`.
    pub fn parse(tag: &str) -> Result<Format> {
        Format::from_str(tag).map_err(|_| Error::UnsupportedFormat(tag.to_string()))
    }

    /// Renders already sorted `profiles`.
    pub fn render(&self, profiles: &[Profile]) -> String {
        match self {
            Format::Rst => rst(profiles),
            Format::Markdown => markdown(profiles),
            Format::Html => html(profiles),
        }
    }
}

/// Bullet list of `@login`_ references followed by their targets.
fn rst(profiles: &[Profile]) -> String {
    let mut lines = Vec::with_capacity(profiles.len());
    let mut links = String::new();
    for profile in profiles {
        match profile.display_name() {
            Some(name) => lines.push(format!("  * {} (`@{}`_)", name, profile.login)),
            None => lines.push(format!("  * `@{}`_", profile.login)),
        }
        links.push_str(&format!(".. _`@{}`: {}\n", profile.login, profile.html_url));
    }
    format!("{}\n\n{}\n{}", ATTRIBUTION, lines.join("\n"), links)
}

fn markdown(profiles: &[Profile]) -> String {
    let lines: Vec<String> = profiles
        .iter()
        .map(|profile| match profile.name.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                format!("* {} ([@{}]({}))", name, profile.login, profile.html_url)
            }
            _ => format!("* [@{}]({})", profile.login, profile.html_url),
        })
        .collect();
    lines.join("\n") + "\n"
}

fn html(profiles: &[Profile]) -> String {
    let mut output = String::from("<table>\n");
    for row in profiles.chunks(HTML_COLUMNS) {
        output.push_str("  <tr>\n");
        for profile in row {
            output.push_str(&format!(
                "    <td align=center><img width=100 src={}><br>{}</td>\n",
                profile.avatar_url,
                html_caption(profile)
            ));
        }
        output.push_str("  </tr>\n");
    }
    output.push_str("</table>\n");
    output
}

fn html_caption(profile: &Profile) -> String {
    match profile.display_name() {
        Some(name) => format!("{} (<a href={}>@{}</a>)", name, profile.html_url, profile.login),
        None => format!("<a href={}>@{}</a>", profile.html_url, profile.login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(login: &str, name: Option<&str>) -> Profile {
        Profile::new(
            login.into(),
            name.map(str::to_string),
            format!("https://github.com/{}", login),
            format!("https://avatars.githubusercontent.com/{}", login),
        )
    }

    #[test]
    fn parse_format_test() {
        assert_eq!(Format::parse("rst").unwrap(), Format::Rst);
        assert_eq!(Format::parse("md").unwrap(), Format::Markdown);
        assert_eq!(Format::parse("markdown").unwrap(), Format::Markdown);
        assert_eq!(Format::parse("html").unwrap(), Format::Html);
        assert!(matches!(Format::parse("xml"), Err(Error::UnsupportedFormat(tag)) if tag == "xml"));
        assert_eq!(Format::Markdown.to_string(), "md");
    }

    #[test]
    fn markdown_without_name_test() {
        let output = Format::Markdown.render(&[profile("octocat", Some(""))]);
        assert_eq!(output, "* [@octocat](https://github.com/octocat)\n");
    }

    #[test]
    fn markdown_blank_name_test() {
        let output = Format::Markdown.render(&[profile("octocat", Some("  ")), profile("pydanny", Some("Daniel"))]);
        assert_eq!(
            output,
            "* [@octocat](https://github.com/octocat)\n* Daniel ([@pydanny](https://github.com/pydanny))\n"
        );
    }

    #[test]
    fn rst_test() {
        let output = Format::Rst.render(&[profile("pydanny", Some("Daniel")), profile("octocat", None)]);
        assert_eq!(
            output,
            "Generated by https://github.com/pydanny/contributors\n\n\
             \x20 * Daniel (`@pydanny`_)\n\
             \x20 * `@octocat`_\n\
             .. _`@pydanny`: https://github.com/pydanny\n\
             .. _`@octocat`: https://github.com/octocat\n"
        );
    }

    #[test]
    fn html_rows_test() {
        let profiles: Vec<Profile> = (0..6).map(|i| profile(&format!("user{}", i), None)).collect();
        let output = Format::Html.render(&profiles);
        assert_eq!(output.matches("  <tr>\n").count(), 2);
        assert_eq!(output.matches("<td ").count(), 6);
        let last_row = output.rsplit("  <tr>\n").next().unwrap();
        assert_eq!(
            last_row,
            "    <td align=center><img width=100 src=https://avatars.githubusercontent.com/user5>\
             <br><a href=https://github.com/user5>@user5</a></td>\n  </tr>\n</table>\n"
        );
    }

    #[test]
    fn html_full_rows_test() {
        let profiles: Vec<Profile> = (0..10).map(|i| profile(&format!("user{}", i), None)).collect();

        let output = Format::Html.render(&profiles[..5]);
        assert_eq!(output.matches("  <tr>\n").count(), 1);
        assert!(output.ends_with("</td>\n  </tr>\n</table>\n"));

        let output = Format::Html.render(&profiles);
        assert_eq!(output.matches("  <tr>\n").count(), 2);
        assert_eq!(output.matches("  </tr>\n").count(), 2);
        assert!(!output.contains("  <tr>\n  </tr>\n"), "No empty row expected");
        assert!(output.ends_with("@user9</a></td>\n  </tr>\n</table>\n"));
    }

    #[test]
    fn html_named_caption_test() {
        let output = Format::Html.render(&[profile("pydanny", Some("Daniel"))]);
        assert!(output.contains("<br>Daniel (<a href=https://github.com/pydanny>@pydanny</a>)</td>"));
    }

    #[test]
    fn empty_profiles_test() {
        assert_eq!(Format::Rst.render(&[]), format!("{}\n\n\n", ATTRIBUTION));
        assert_eq!(Format::Markdown.render(&[]), "\n");
        assert_eq!(Format::Html.render(&[]), "<table>\n</table>\n");
    }
}
