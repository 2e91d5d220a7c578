//! Startup seeding: fills an empty store with the portfolio owner's content, once.

use tracing::info;

use crate::models::career::{NewAchievement, NewEducation, NewExperience};
use crate::models::profile::NewProfile;
use crate::models::project::NewProject;
use crate::models::skill::{NewSkill, SkillCategory};
use crate::models::{tech_csv, ContentCounts, PortfolioContent};
use crate::store::{ContentStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// A profile already existed; nothing was written.
    AlreadySeeded { profiles: i64 },
    Seeded(ContentCounts),
}

/// Seeds the store if it holds no profile. Calling it again is a no-op.
///
/// A failed insert is returned as-is, without retry. Whether the earlier rows
/// survive depends on the store's `insert_content`.
pub async fn ensure_seeded(store: &dyn ContentStore) -> Result<SeedOutcome, StoreError> {
    let profiles = store.count_profiles().await?;
    if profiles > 0 {
        info!("Content store already holds {profiles} profile(s), skipping seed");
        return Ok(SeedOutcome::AlreadySeeded { profiles });
    }

    let content = portfolio_content();
    store.insert_content(&content).await?;

    let counts = content.counts();
    info!(
        "Seeded portfolio content: {} experiences, {} skills, {} projects, {} education, {} achievements",
        counts.experiences, counts.skills, counts.projects, counts.education, counts.achievements
    );
    Ok(SeedOutcome::Seeded(counts))
}

/// The fixed seed bundle.
pub fn portfolio_content() -> PortfolioContent {
    PortfolioContent {
        profile: profile(),
        experiences: experiences(),
        skills: skills(),
        projects: projects(),
        education: education(),
        achievements: achievements(),
    }
}

fn profile() -> NewProfile {
    NewProfile {
        full_name: "Atul Ajit Gupta".to_string(),
        title: "React Native & MERN Stack Developer".to_string(),
        subtitle: "Building scalable, secure & user-friendly applications".to_string(),
        email: "gptatul007@gmail.com".to_string(),
        phone: "+91 8707512141".to_string(),
        location: "Nagpur, Maharashtra, India".to_string(),
        linked_in: "https://linkedin.com/in/atul-a-gupta".to_string(),
        github: "https://github.com/atulgupta05".to_string(),
        portfolio: "https://atul-portfolio.pages.dev/".to_string(),
        bio: "Cross-Platform Mobile & MERN Stack Developer with 2.5+ years of experience \
              building scalable, secure, and user-friendly web and mobile-ready applications. \
              Proficient in React Native, React.js, Node.js, Express.js, MongoDB, and Spring Boot. \
              Experienced in full application lifecycle development, RESTful API design, \
              database optimization, debugging, and Agile collaboration. Passionate about \
              delivering high-quality mobile and web solutions."
            .to_string(),
        profile_image_url: "https://ui-avatars.com/api/?name=Atul+Gupta&background=7C4DFF&color=fff&size=300&font-size=0.35&bold=true".to_string(),
        years_of_experience: 2,
        projects_completed: 5,
        companies_worked: 2,
        certifications_earned: 3,
    }
}

fn experiences() -> Vec<NewExperience> {
    vec![
        NewExperience {
            company: "Stoic & Salamander Corporation Pvt. Ltd.".to_string(),
            role: "React Native & MERN Stack Developer".to_string(),
            start_date: "Jun 2025".to_string(),
            end_date: "Present".to_string(),
            location: "Pune, India".to_string(),
            description: "Contributing to mobile-ready and cross-platform application development \
                          using React Native concepts. Working on reusable business logic shared \
                          across web and mobile platforms. Developing scalable web applications \
                          using MongoDB, Express.js, React.js, and Node.js. Designing and \
                          implementing RESTful APIs and integrating with frontend for seamless \
                          workflows. Collaborating with cross-functional teams to deliver secure \
                          and efficient enterprise solutions."
                .to_string(),
            technologies: tech_csv::split("React Native, React.js, Node.js, Express.js, MongoDB, REST APIs"),
            logo_url: "https://ui-avatars.com/api/?name=SS&background=6C63FF&color=fff&size=64"
                .to_string(),
            current: true,
            sort_order: 1,
        },
        NewExperience {
            company: "Webdroid Edutech LLP".to_string(),
            role: "Junior Full Stack Developer (MERN + React Native + Spring Boot)".to_string(),
            start_date: "Aug 2023".to_string(),
            end_date: "Apr 2025".to_string(),
            location: "Nagpur, India".to_string(),
            description: "Contributed to mobile-ready and cross-platform application development \
                          using React Native concepts. Worked on reusable business logic shared \
                          across web and mobile platforms. Developed and maintained full-stack web \
                          applications using MongoDB, Express.js, React.js, and Node.js. Designed \
                          and implemented REST APIs using Node.js and Express.js for seamless data \
                          flow. Collaborated in Agile teams to deliver robust and scalable \
                          applications."
                .to_string(),
            technologies: tech_csv::split(
                "React Native, React.js, Node.js, Express.js, MongoDB, Spring Boot, REST APIs, Agile",
            ),
            logo_url: "https://ui-avatars.com/api/?name=WE&background=00C9A7&color=fff&size=64"
                .to_string(),
            current: false,
            sort_order: 2,
        },
    ]
}

fn skills() -> Vec<NewSkill> {
    use SkillCategory::*;

    vec![
        NewSkill::new("React.js", Frontend, 90, "react"),
        NewSkill::new("JavaScript", Frontend, 88, "javascript"),
        NewSkill::new("HTML5", Frontend, 92, "html5"),
        NewSkill::new("CSS3", Frontend, 90, "css3"),
        NewSkill::new("Ant Design", Frontend, 80, "antdesign"),
        NewSkill::new("React Native", Mobile, 85, "react"),
        NewSkill::new("Cross-Platform Development", Mobile, 82, "mobile"),
        NewSkill::new("Node.js", Backend, 88, "nodejs"),
        NewSkill::new("Express.js", Backend, 87, "express"),
        NewSkill::new("REST APIs", Backend, 90, "api"),
        NewSkill::new("Spring Boot", Backend, 75, "spring"),
        NewSkill::new("MongoDB", Database, 88, "mongodb"),
        NewSkill::new("SQL", Database, 80, "sql"),
        NewSkill::new("SQLite", Database, 75, "sqlite"),
        NewSkill::new("Java", Languages, 78, "java"),
        NewSkill::new("C++", Languages, 72, "cpp"),
        NewSkill::new("C", Languages, 70, "c"),
    ]
}

fn project(
    title: &str,
    description: &str,
    technologies: &str,
    image_seed: &str,
    featured: bool,
    sort_order: i32,
) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        technologies: tech_csv::split(technologies),
        image_url: format!("https://picsum.photos/seed/{image_seed}/800/500"),
        live_url: String::new(),
        github_url: "https://github.com/atulgupta05".to_string(),
        featured,
        sort_order,
    }
}

fn projects() -> Vec<NewProject> {
    vec![
        project(
            "Expense Management System",
            "Full-stack expense management application with CRUD functionalities and optimized \
             MongoDB queries. Built with MERN stack and Ant Design for a polished, professional \
             UI. Features include expense tracking, category filtering, and data visualization.",
            "React.js, Node.js, Express.js, MongoDB, Ant Design",
            "expense",
            true,
            1,
        ),
        project(
            "Food Ordering App",
            "End-to-end food ordering platform with user authentication and order management. \
             Features include menu browsing, cart functionality, secure checkout, and real-time \
             order tracking.",
            "React.js, Node.js, Express.js, MongoDB",
            "foodapp",
            true,
            2,
        ),
        project(
            "Product Stock Collection App",
            "Stock management tool for tracking product inventories. Provides real-time inventory \
             updates, low-stock alerts, and comprehensive reporting dashboards for efficient \
             stock control.",
            "React.js, Node.js, Express.js, MongoDB",
            "stockapp",
            true,
            3,
        ),
        project(
            "Real-Estate Web Page",
            "Fully responsive and interactive real-estate webpage built with React. Features \
             property listings, search filters, image galleries, and smooth animations for an \
             engaging user experience.",
            "React.js, CSS3, Responsive Design",
            "realestate",
            false,
            4,
        ),
        project(
            "Fitness-Club Web Page",
            "Responsive and user-friendly design for a fitness club website. Showcases membership \
             plans, trainer profiles, class schedules, and a modern UI with smooth transitions.",
            "React.js, CSS3, Responsive Design",
            "fitnessclub",
            false,
            5,
        ),
    ]
}

fn education() -> Vec<NewEducation> {
    vec![
        NewEducation {
            institution: "Priyadarshini College of Engineering, Nagpur".to_string(),
            degree: "Bachelor of Engineering".to_string(),
            field: "Information Technology".to_string(),
            start_year: "2019".to_string(),
            end_year: "2023".to_string(),
            grade: "8.8 CGPA".to_string(),
            logo_url: "https://ui-avatars.com/api/?name=PCE&background=1A237E&color=fff&size=64"
                .to_string(),
            sort_order: 1,
        },
        NewEducation {
            institution: "Guru Nanak College of Science, Ballarpur".to_string(),
            degree: "Higher Secondary".to_string(),
            field: "Computer Science".to_string(),
            start_year: "2017".to_string(),
            end_year: "2019".to_string(),
            grade: "65.08%".to_string(),
            logo_url: "https://ui-avatars.com/api/?name=GNC&background=0D47A1&color=fff&size=64"
                .to_string(),
            sort_order: 2,
        },
        NewEducation {
            institution: "Adarsh HSS Sahatwar, Ballia".to_string(),
            degree: "Secondary Education".to_string(),
            field: "General Studies".to_string(),
            start_year: "2014".to_string(),
            end_year: "2016".to_string(),
            grade: "74%".to_string(),
            logo_url: "https://ui-avatars.com/api/?name=AHS&background=283593&color=fff&size=64"
                .to_string(),
            sort_order: 3,
        },
    ]
}

fn achievement(title: &str, description: &str, year: &str, sort_order: i32) -> NewAchievement {
    NewAchievement {
        title: title.to_string(),
        description: description.to_string(),
        icon: "verified".to_string(),
        year: year.to_string(),
        sort_order,
    }
}

fn achievements() -> Vec<NewAchievement> {
    vec![
        achievement(
            "ReactJS for Frontend Development",
            "Udemy Certification — Comprehensive React.js course covering hooks, state \
             management, routing, and component architecture.",
            "Sep 2024",
            1,
        ),
        achievement(
            "SQL for Data Analytics",
            "Udemy Certification — In-depth SQL course covering queries, joins, subqueries, and \
             data analytics techniques.",
            "Oct 2022",
            2,
        ),
        achievement(
            "Java Programming",
            "Udemy Certification — Core Java programming course covering OOP concepts, data \
             structures, and application development.",
            "Jul 2022",
            3,
        ),
    ]
}
