//! The about page.

use super::layout::{escape, render_page};
use crate::config::SiteConfig;

/// Skill groups shown as badge lists.
const SKILLS: &[(&str, &[&str])] = &[
    ("Frontend", &["React", "TypeScript", "Next.js", "Tailwind CSS", "Vue.js"]),
    ("Backend", &["Node.js", "Python", "Express", "FastAPI", "GraphQL"]),
    ("Database", &["PostgreSQL", "MongoDB", "Redis", "Supabase", "Firebase"]),
    ("Tools", &["Git", "Docker", "AWS", "Vercel", "Figma"]),
];

struct Experience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
}

const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Senior Full-Stack Developer",
        company: "Tech Innovations Inc.",
        period: "2023 - Present",
        description: "Leading development of scalable web applications serving 100k+ users. Implemented microservices architecture and improved performance by 40%.",
    },
    Experience {
        title: "Frontend Developer",
        company: "Digital Solutions Co.",
        period: "2021 - 2023",
        description: "Built responsive web applications using React and TypeScript. Collaborated with design teams to create pixel-perfect user interfaces.",
    },
    Experience {
        title: "Junior Developer",
        company: "StartupTech",
        period: "2020 - 2021",
        description: "Developed features for a SaaS platform using modern web technologies. Gained experience in agile development and code review processes.",
    },
];

pub fn about_page(config: &SiteConfig) -> String {
    let skills = SKILLS
        .iter()
        .map(|(group, items)| {
            let badges = items
                .iter()
                .map(|item| format!("<a>{}</a>", escape(item)))
                .collect::<Vec<_>>()
                .join("\n                    ");
            format!(
                r#"            <div class="feature">
                <h3>{group}</h3>
                <div class="tag-list">
                    {badges}
                </div>
            </div>"#,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let experience = EXPERIENCE
        .iter()
        .map(|entry| {
            format!(
                r#"            <div class="timeline-entry">
                <h3>{title}</h3>
                <p class="period">{company} &middot; {period}</p>
                <p>{description}</p>
            </div>"#,
                title = escape(entry.title),
                company = escape(entry.company),
                period = escape(entry.period),
                description = escape(entry.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<section class="hero">
    <div class="container">
        <h1>About Me</h1>
        <p>Passionate developer crafting digital experiences that make a difference</p>
    </div>
</section>
<section class="section">
    <div class="container about-grid">
        <div>
            <h2>Hello, I'm a Developer</h2>
            <p>I'm a passionate full-stack developer with over 4 years of experience creating modern web applications. My journey in tech started with a curiosity about how websites work, and it has evolved into a deep passion for crafting exceptional digital experiences.</p>
            <p>I specialize in React, TypeScript, and Node.js, with a strong focus on writing clean, maintainable code and building scalable applications. I believe in the power of technology to solve real-world problems and improve people's lives.</p>
            <p>When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or sharing knowledge through blog posts and mentoring.</p>
        </div>
        <div class="card">
            <h3>Quick Facts</h3>
            <p>&#128205; Based in San Francisco, CA</p>
            <p>&#127891; Computer Science Graduate</p>
            <p>&#9749; Coffee enthusiast</p>
            <p>&#128640; Always learning new tech</p>
            <p>&#127793; Open source contributor</p>
        </div>
    </div>
</section>
<section class="section alt">
    <div class="container">
        <div class="section-heading">
            <h2>Skills &amp; Technologies</h2>
        </div>
        <div class="features">
{skills}
        </div>
    </div>
</section>
<section class="section">
    <div class="container">
        <div class="section-heading">
            <h2>Experience</h2>
        </div>
{experience}
    </div>
</section>
"#,
    );

    render_page(
        config,
        "About",
        "About the developer behind this portfolio",
        "/about/",
        &body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page_sections() {
        let mut config = SiteConfig::default();
        config.base.title = "Portfolio".to_string();
        let html = about_page(&config);

        assert!(html.contains("About Me"));
        assert!(html.contains("Skills &amp; Technologies"));
        assert!(html.contains("Experience"));
        assert!(html.contains("Senior Full-Stack Developer"));
        assert!(html.contains("PostgreSQL"));
        assert!(html.contains("<title>About | Portfolio</title>"));
    }
}
