//! The page content. Everything here is inert display data.

use crate::content::models::{
    Achievement, Asset, BlogPost, ContactInfo, Education, Experience, Interest, Language,
    Portfolio, Profile, Project, Section, SectionContent, SkillGroup, TechIcon,
};

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tech_icon(name: &str, icon_path: &str, color: &str) -> TechIcon {
    TechIcon {
        name: name.to_string(),
        icon_url: format!("{DEVICON_BASE}/{icon_path}"),
        color: color.to_string(),
    }
}

fn skill_group(category: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        skills: strings(skills),
    }
}

/// Builds the portfolio shown on the page.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Joshua Owuonda".to_string(),
            headline: "Junior Software Engineer".to_string(),
            photo: Asset::image("profileImage.png"),
            fun_fact: "I treat coding like a puzzle, I don't stop until every piece fits perfectly."
                .to_string(),
        },
        contact: ContactInfo {
            email: "joshuaowuonda41@gmail.com".to_string(),
            location: "Nairobi, Kenya".to_string(),
            phone: "+254 799 732 318".to_string(),
            github: "github.com/Joshcode41".to_string(),
        },
        sections: sections(),
        education: vec![
            Education {
                qualification: "Bachelors in Business Information Technology".to_string(),
                institution: "Strathmore University".to_string(),
                location: Some("Nairobi, Kenya".to_string()),
                period: "June 2023 - June 2027".to_string(),
            },
            Education {
                qualification: "ALX - Software Engineering".to_string(),
                institution: "Software development".to_string(),
                location: None,
                period: "2026 - ongoing".to_string(),
            },
        ],
        languages: vec![
            Language {
                name: "English".to_string(),
                proficiency: "fluent".to_string(),
                level: 5,
            },
            Language {
                name: "Kiswahili".to_string(),
                proficiency: "fluent".to_string(),
                level: 5,
            },
        ],
        interests: ["Coding", "Reading", "Tech News", "Problem Solving"]
            .iter()
            .map(|label| Interest {
                label: label.to_string(),
            })
            .collect(),
        cv: Asset::document("Joshua_Owuonda_CV.pdf"),
        cv_download_name: "Joshua_Owuonda_CV.pdf".to_string(),
    }
}

fn sections() -> Vec<Section> {
    vec![
        Section {
            id: "header".to_string(),
            title: String::new(),
            content: SectionContent::Header {
                title: "Joshua Owuonda".to_string(),
            },
        },
        Section {
            id: "profile".to_string(),
            title: "Career Profile".to_string(),
            content: SectionContent::Profile {
                paragraphs: strings(&[
                    "Self-motivated software engineer seeking an internship in Software or Web Development. Skilled in full-stack development, software design, and system implementation.",
                    "I am proficient in Python, JavaScript, and frameworks like React and Django, with hands-on experience in developing web applications and managing databases.",
                    "I'm currently a Software Engineer trainee actively building impactful and user-focused solutions through my projects and collaborative learning experiences.",
                    "I thrive in team environments and possess excellent communication skills, making me a strong collaborator.",
                    "I'm an adept at developing full-stack applications that support company operations, develop scalable software solutions, and deliver user-friendly products to deliver high-quality products.",
                    "I've also built practical solutions through pet-projects, such as a missing children search system now being re-developed with AI enhancement.",
                    "My backend experience spans Django, Flask, and Node.js, while my frontend stack includes Vue.js and HTML/CSS.",
                    "I believe in lifelong learning, collaboration, and communication. I thrive in environments where curiosity meets purposeful engineering.",
                ]),
            },
        },
        Section {
            id: "experience".to_string(),
            title: "Experience".to_string(),
            content: SectionContent::Experience {
                roles: vec![Experience {
                    organization: "Masterspace solutions".to_string(),
                    role: "Software Engineer Trainee".to_string(),
                    period: "February 2026 - April 2026".to_string(),
                    duration: "3 months".to_string(),
                    bullets: strings(&[
                        "I'm working to build internal applications to help on company operations.",
                        "Developing scalable software solutions using modern programming languages and frameworks.",
                        "Collaborating with cross-functional teams to deliver high-quality software on time.",
                    ]),
                }],
            },
        },
        Section {
            id: "achievements".to_string(),
            title: "Achievements".to_string(),
            content: SectionContent::Achievements { items: achievements() },
        },
        Section {
            id: "blogs".to_string(),
            title: "Blogs".to_string(),
            content: SectionContent::Blogs {
                posts: vec![
                    BlogPost {
                        title: "Web Browsing".to_string(),
                        summary: "What happens when you type https://www.google.com in your browser"
                            .to_string(),
                        link: Some("https://www.google.com".to_string()),
                        tags: strings(&["SOFTWARE ENGINEERING", "WEB DEVELOPMENT"]),
                    },
                    BlogPost {
                        title: "Working With APIs".to_string(),
                        summary: "SalesforceMarketers: Simplifying Salesforce for Everyone, an E-Learning Project"
                            .to_string(),
                        link: None,
                        tags: strings(&["SOFTWARE ENGINEERING", "WEB DEVELOPMENT", "API"]),
                    },
                ],
            },
        },
        Section {
            id: "projects".to_string(),
            title: "Projects".to_string(),
            content: SectionContent::Projects { projects: projects() },
        },
        Section {
            id: "tech-stack".to_string(),
            title: "Tech Stack & Frameworks".to_string(),
            content: SectionContent::TechStack {
                icons: tech_icons(),
                groups: skill_groups(),
            },
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    [
        (
            "🏆",
            "Full-Stack Software Development (Final Year Project)",
            "Designed and implemented a UAPMS web application covering multiple project including HTML/CSS development, database design, API integration, and quality assurance with rigorous functionality and usability.",
        ),
        (
            "📱",
            "Applied Core Software Engineering Principles",
            "Applied agile software development (Scrum), requirements gathering, and quantitative problem-solving techniques across academic and personal projects to deliver robust and efficient software solutions.",
        ),
        (
            "🗄️",
            "Database Design & Integration",
            "Designed and integrated relational databases using SQL, implementing normalized schemas, CRUD operations, and optimized queries to support application functionality.",
        ),
        (
            "⚙️",
            "Version Control & Collaborative Development",
            "Utilized Git for version control and repository management, following practices such as meaningful commits, branching, and code review.",
        ),
        (
            "🌐",
            "Web Application Development & Testing",
            "Developed responsive and accessible web application functionally and debugged using to improve performance validation, and usability.",
        ),
    ]
    .into_iter()
    .map(|(icon, title, description)| Achievement {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "University Academic Performance Management System (UAPMS)".to_string(),
            category: "Final Year Project".to_string(),
            image: Asset::image("uapmsImage.png"),
            description: "A web-based management system for online appointment scheduling, course details, lecturer and student management, and account access.".to_string(),
            features: strings(&[
                "Multi-user authentication system for various user types",
                "Built a responsive frontend for both mobile and web access",
                "Implemented student dashboard to view GPA calculations, attendance tracking, and performance monitoring.",
                "Created backend systems for GPA calculation, instructor/student registration, database connection, appointment booking, and course registration",
                "Integrated Django REST database for secure data-related queries",
                "Used Git for version control",
            ]),
            tags: strings(&["Python", "Django", "JavaScript", "HTML", "CSS", "Bootstrap"]),
            stars: 0,
            forks: 0,
            source_link: "https://github.com".to_string(),
        },
        Project {
            title: "Online Appointment Scheduling System".to_string(),
            category: "Web Application".to_string(),
            image: Asset::image("appointmentsImage.png"),
            description: "A web-based platform for online appointment scheduling that simplifies booking, tracks availability, and sends automated confirmations to users.".to_string(),
            features: strings(&[
                "Built a responsive frontend for both online and mobile access",
                "Used OpenCV for real-time face detection",
                "Designed user-specific dashboards for students, lecturers, and administrators",
                "Optimized performance to support 50+ concurrent users using the concurrent users performance metric",
            ]),
            tags: strings(&["HTML", "CSS", "JavaScript", "Bootstrap"]),
            stars: 0,
            forks: 0,
            source_link: "https://github.com".to_string(),
        },
        Project {
            title: "Mpesa Gateway".to_string(),
            category: "API Integration".to_string(),
            image: Asset::image("mGatewayImage.png"),
            description: "An application that integrates with the M-Pesa API to facilitate mobile money transactions, including payments, balance inquiry, and transaction history retrieval.".to_string(),
            features: strings(&[
                "Implemented STK Push for seamless payment collection",
                "Used OAuth for secure access to M-Pesa API services",
            ]),
            tags: strings(&["NodeJs", "M-Pesa API", "REST API", "ExpressJs"]),
            stars: 0,
            forks: 0,
            source_link: "https://github.com".to_string(),
        },
    ]
}

fn tech_icons() -> Vec<TechIcon> {
    vec![
        tech_icon("Python", "python/python-original.svg", "#3776AB"),
        tech_icon("JavaScript", "javascript/javascript-original.svg", "#F7DF1E"),
        tech_icon("Java", "java/java-original.svg", "#007396"),
        tech_icon("PHP", "php/php-original.svg", "#777BB4"),
        tech_icon("C", "c/c-original.svg", "#A8B9CC"),
        tech_icon("C++", "cplusplus/cplusplus-original.svg", "#00599C"),
        tech_icon("HTML5", "html5/html5-original.svg", "#E34F26"),
        tech_icon("CSS3", "css3/css3-original.svg", "#1572B6"),
        tech_icon("Kotlin", "kotlin/kotlin-original.svg", "#7F52FF"),
        tech_icon("NodeJs", "nodejs/nodejs-original.svg", "#339933"),
        tech_icon("Django", "django/django-plain.svg", "#092E20"),
        tech_icon("Flask", "flask/flask-original.svg", "#000000"),
        tech_icon("PostgreSQL", "postgresql/postgresql-original.svg", "#4169E1"),
        tech_icon("MySQL", "mysql/mysql-original.svg", "#4479A1"),
        tech_icon("Git", "git/git-original.svg", "#F05032"),
        tech_icon("REST APIs", "fastapi/fastapi-original.svg", "#009688"),
    ]
}

fn skill_groups() -> Vec<SkillGroup> {
    vec![
        skill_group(
            "Programming Languages",
            &["PHP", "Java", "Python", "SQL", "JavaScript", "TypeScript", "Kotlin", "C++", "C#"],
        ),
        skill_group(
            "Web & Application Development",
            &[
                "HTML",
                "CSS",
                "Bootstrap",
                "ReactJs",
                "NodeJs",
                "REST API (Integration)",
                "Responsive Web Design",
            ],
        ),
        skill_group(
            "Databases & Cloud",
            &["MySQL", "PostgreSQL", "Firebase", "OracleDb", "API/MuleSoft"],
        ),
        skill_group(
            "Tools & Platforms",
            &[
                "Git",
                "GitHub",
                "VSCode",
                "IntelliJ",
                "Android Studio",
                "XAMPP",
                "Docker",
                "SQLite",
            ],
        ),
        skill_group(
            "Systems & Networking",
            &["Linux Networking", "System configuration", "Troubleshooting"],
        ),
        skill_group(
            "Soft Skills",
            &[
                "Problem-solving & analytical thinking",
                "Team collaboration & communication",
                "Time management & accountability",
                "Initiative & Support to team",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::AssetKind;

    #[test]
    fn test_sections_in_document_order() {
        let p = portfolio();
        assert_eq!(
            p.section_ids(),
            vec!["header", "profile", "experience", "achievements", "blogs", "projects", "tech-stack"]
        );
    }

    #[test]
    fn test_project_stats_are_placeholders() {
        let p = portfolio();
        let Some(SectionContent::Projects { projects }) = p.section("projects").map(|s| &s.content)
        else {
            panic!("projects section missing");
        };
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|pr| pr.stars == 0 && pr.forks == 0));
    }

    #[test]
    fn test_assets_list_cv_first() {
        let p = portfolio();
        let assets = p.assets();
        assert_eq!(assets[0].kind, AssetKind::Document);
        assert_eq!(assets.len(), 5);
        assert!(p.find_asset("mGatewayImage.png").is_some());
        assert!(p.find_asset("missing.png").is_none());
    }

    #[test]
    fn test_mailto_uses_contact_email() {
        assert_eq!(portfolio().mailto(), "mailto:joshuaowuonda41@gmail.com");
    }
}
