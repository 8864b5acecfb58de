//! Renders the portfolio to a single HTML document.
//!
//! Main column: one `<section id=...>` per content section, in document order.
//! Sidebar: profile, contact/download actions, fun fact, contact details,
//! education, languages, interests. All text goes through `html_escape`.

use crate::content::models::{
    Achievement, BlogPost, Education, Experience, Interest, Language, Portfolio, Project, Section,
    SectionContent, SkillGroup, TechIcon, MAX_LANGUAGE_LEVEL,
};
use crate::render::html::{badges, bullet_list, html_escape};

/// Path served by the CV download route.
pub const CV_PATH: &str = "/cv";

const BASE_CSS: &str = r#"
body { margin: 0; font-family: Inter, system-ui, sans-serif; background: #f9fafb; color: #111827; }
.page { max-width: 80rem; margin: 0 auto; display: flex; }
.main { flex: 1; background: #fff; padding: 3rem; }
.sidebar { width: 24rem; background: #0f766e; color: #fff; padding: 2rem; position: sticky; top: 0; height: 100vh; overflow-y: auto; }
section { margin-bottom: 3rem; }
.section-title { border-left: 4px solid #0d9488; padding-left: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1.5rem; margin-top: 1.5rem; }
.badge { display: inline-block; padding: .125rem .5rem; margin: .125rem; border-radius: .375rem; background: #f3f4f6; font-size: .75rem; }
.tag { color: #0d9488; border: 1px solid #0d9488; background: transparent; }
.tech-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 1rem; }
.tech-icon { display: flex; flex-direction: column; align-items: center; padding: 1.5rem; border-radius: .5rem; border: 1px solid #e5e7eb; }
.tech-icon img { width: 3rem; height: 3rem; object-fit: contain; }
.project-image { width: 100%; height: 12rem; object-fit: cover; }
.button { display: block; text-align: center; background: #fff; color: #0f766e; padding: .5rem; border-radius: .375rem; margin-top: .75rem; text-decoration: none; }
.bars { display: flex; gap: .25rem; }
.bar { flex: 1; height: .5rem; border-radius: .25rem; background: rgba(255,255,255,.2); }
.bar.filled { background: #fff; }
.avatar { width: 8rem; height: 8rem; border-radius: 50%; object-fit: cover; border: 4px solid #fff; }
footer { background: #111827; color: #fff; text-align: center; padding: 1.5rem; font-size: .875rem; }
"#;

/// Renders the full page. `year` feeds the footer copyright line.
pub fn render_page(portfolio: &Portfolio, year: i32) -> String {
    let sections: String = portfolio.sections.iter().map(render_section).collect();
    let sidebar = render_sidebar(portfolio);
    let name = html_escape(&portfolio.profile.name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name}</title>
    <style>{css}</style>
</head>
<body>
    <div class="page">
        <main class="main">
{sections}
        </main>
        <aside class="sidebar">
{sidebar}
        </aside>
    </div>
    <footer><p>&copy; {year} {name}. All rights reserved.</p></footer>
</body>
</html>
"#,
        css = BASE_CSS,
    )
}

fn render_section(section: &Section) -> String {
    let body: String = match &section.content {
        SectionContent::Header { title } => {
            return format!(
                r#"<section id="{id}"><h1>{title}</h1></section>"#,
                id = html_escape(&section.id),
                title = html_escape(title),
            );
        }
        SectionContent::Profile { paragraphs } => paragraphs
            .iter()
            .map(|p| format!("<p>{}</p>", html_escape(p)))
            .collect(),
        SectionContent::Experience { roles } => roles.iter().map(render_experience).collect(),
        SectionContent::Achievements { items } => items.iter().map(render_achievement).collect(),
        SectionContent::Blogs { posts } => posts.iter().map(render_blog_post).collect(),
        SectionContent::Projects { projects } => projects.iter().map(render_project).collect(),
        SectionContent::TechStack { icons, groups } => render_tech_stack(icons, groups),
    };

    format!(
        r#"<section id="{id}"><h2 class="section-title">{title}</h2>{body}</section>"#,
        id = html_escape(&section.id),
        title = html_escape(&section.title),
    )
}

fn render_experience(role: &Experience) -> String {
    format!(
        r#"<div class="card"><h3>{org}</h3><p>{role}</p><p class="period">{period}</p><span class="badge">{duration}</span>{bullets}</div>"#,
        org = html_escape(&role.organization),
        role = html_escape(&role.role),
        period = html_escape(&role.period),
        duration = html_escape(&role.duration),
        bullets = bullet_list(&role.bullets, "bullets"),
    )
}

fn render_achievement(item: &Achievement) -> String {
    format!(
        r#"<div class="achievement"><span class="icon">{icon}</span><div><h3>{title}</h3><p>{description}</p></div></div>"#,
        icon = html_escape(&item.icon),
        title = html_escape(&item.title),
        description = html_escape(&item.description),
    )
}

fn render_blog_post(post: &BlogPost) -> String {
    let summary = html_escape(&post.summary);
    // Link the URL in place when the summary mentions it.
    let summary = match &post.link {
        Some(link) => {
            let escaped = html_escape(link);
            let anchor = format!(r#"<a href="{escaped}">{escaped}</a>"#);
            if summary.contains(&escaped) {
                summary.replacen(&escaped, &anchor, 1)
            } else {
                format!("{summary} {anchor}")
            }
        }
        None => summary,
    };
    format!(
        r#"<div class="card"><h3>{title}</h3><p>{summary}</p><div>{tags}</div></div>"#,
        title = html_escape(&post.title),
        tags = badges(&post.tags, "badge"),
    )
}

fn render_project(project: &Project) -> String {
    format!(
        r#"<div class="card project">
<img class="project-image" src="{image}" alt="{title}">
<h3>{title}</h3>
<p class="category">{category}</p>
<p>{description}</p>
{features}
<p><strong>Tags:</strong></p><div>{tags}</div>
<div class="stats"><span>{stars} stars</span> <span>{forks} forks</span>
<a href="{source}" target="_blank" rel="noopener noreferrer">SOURCE</a></div>
</div>"#,
        image = html_escape(&project.image.href()),
        title = html_escape(&project.title),
        category = html_escape(&project.category),
        description = html_escape(&project.description),
        features = bullet_list(&project.features, "features"),
        tags = badges(&project.tags, "badge tag"),
        stars = project.stars,
        forks = project.forks,
        source = html_escape(&project.source_link),
    )
}

fn render_tech_stack(icons: &[TechIcon], groups: &[SkillGroup]) -> String {
    let icons: String = icons
        .iter()
        .map(|icon| {
            // `15` is the hex alpha suffix for a light tint of the brand colour.
            format!(
                r#"<div class="tech-icon" style="background-color: {color}15"><img src="{url}" alt="{name}"><span>{name}</span></div>"#,
                color = html_escape(&icon.color),
                url = html_escape(&icon.icon_url),
                name = html_escape(&icon.name),
            )
        })
        .collect();
    let groups: String = groups
        .iter()
        .map(|group| {
            format!(
                r#"<div class="skill-group"><h3>{category}</h3><div>{skills}</div></div>"#,
                category = html_escape(&group.category),
                skills = badges(&group.skills, "badge"),
            )
        })
        .collect();
    format!(r#"<div class="tech-grid">{icons}</div><div class="skills">{groups}</div>"#)
}

fn render_sidebar(portfolio: &Portfolio) -> String {
    let profile = &portfolio.profile;
    let contact = &portfolio.contact;

    let contact_rows = [
        &contact.email,
        &contact.location,
        &contact.phone,
        &contact.github,
    ]
    .iter()
    .map(|row| format!("<li>{}</li>", html_escape(row)))
    .collect::<String>();

    let education: String = portfolio.education.iter().map(render_education).collect();
    let languages: String = portfolio.languages.iter().map(render_language).collect();
    let interests: String = portfolio.interests.iter().map(render_interest).collect();

    format!(
        r#"<div class="profile">
<img class="avatar" src="{photo}" alt="Profile">
<h2>{name}</h2>
<p>{headline}</p>
<a class="button contact" href="{mailto}">Contact Me</a>
<a class="button download" href="{cv_path}" download="{cv_name}">Download CV</a>
</div>
<div class="fun-fact"><h3>Fun Fact:</h3><p>{fun_fact}</p></div>
<div class="contact-info"><h3>CONTACT INFORMATION</h3><ul>{contact_rows}</ul></div>
<div class="education"><h3>EDUCATION</h3>{education}</div>
<div class="languages"><h3>LANGUAGES</h3>{languages}</div>
<div class="interests"><h3>INTERESTS &amp; HOBBIES</h3><ul>{interests}</ul></div>"#,
        photo = html_escape(&profile.photo.href()),
        name = html_escape(&profile.name),
        headline = html_escape(&profile.headline),
        mailto = html_escape(&portfolio.mailto()),
        cv_path = CV_PATH,
        cv_name = html_escape(&portfolio.cv_download_name),
        fun_fact = html_escape(&profile.fun_fact),
    )
}

fn render_education(entry: &Education) -> String {
    let location = entry
        .location
        .as_deref()
        .map(|l| format!("<p>{}</p>", html_escape(l)))
        .unwrap_or_default();
    format!(
        r#"<div><p><strong>{qualification}</strong></p><p>{institution}</p>{location}<p class="period">{period}</p></div>"#,
        qualification = html_escape(&entry.qualification),
        institution = html_escape(&entry.institution),
        period = html_escape(&entry.period),
    )
}

fn render_language(language: &Language) -> String {
    let filled = language.level.min(MAX_LANGUAGE_LEVEL);
    let bars: String = (0..MAX_LANGUAGE_LEVEL)
        .map(|i| {
            if i < filled {
                r#"<div class="bar filled"></div>"#
            } else {
                r#"<div class="bar"></div>"#
            }
        })
        .collect();
    format!(
        r#"<div class="language"><span>{name} - {proficiency}</span><div class="bars">{bars}</div></div>"#,
        name = html_escape(&language.name),
        proficiency = html_escape(&language.proficiency),
    )
}

fn render_interest(interest: &Interest) -> String {
    format!("<li>{}</li>", html_escape(&interest.label))
}
