use crate::models::QueryTokens;

/// Keyword to upskilling course table, in suggestion priority order
pub const COURSE_MAPPING: [(&str, &[&str]); 16] = [
    ("python", &["Data Science with Python", "Programming in Python"]),
    ("machine learning", &["Advanced Machine Learning", "Machine Learning Foundations"]),
    ("ml", &["Advanced Machine Learning"]),
    ("data", &["Data Analysis with Python", "Data Science with Python"]),
    ("nlp", &["Natural Language Processing", "NLP with Deep Learning"]),
    ("deep learning", &["Deep Learning Specialization", "Neural Networks and Deep Learning"]),
    ("web", &["Full-Stack Web Development", "Frontend Web Development"]),
    ("html", &["Full-Stack Web Development"]),
    ("css", &["Full-Stack Web Development"]),
    ("javascript", &["Full-Stack Web Development"]),
    ("cloud", &["Cloud Computing Basics", "Cloud Fundamentals (AWS/GCP)"]),
    ("database", &["Database Management Systems", "SQL for Data Science"]),
    ("blockchain", &["Blockchain Fundamentals"]),
    ("iot", &["IoT Fundamentals"]),
    ("cyber", &["Cybersecurity Essentials"]),
    ("excel", &["Excel for Data Analysis"]),
];

/// Suggested when no keyword hits
pub const GENERIC_COURSES: [&str; 3] = [
    "Data Science with Python",
    "Full-Stack Web Development",
    "Fundamentals of Machine Learning",
];

/// Suggest upskilling courses for a profile
///
/// A keyword hits when it appears inside any skill or interest token, so
/// "ml" also hits "html". Courses are collected in table order without
/// duplicates, falling back to `GENERIC_COURSES`, then cut to `top_k`.
pub fn suggest_courses(query: &QueryTokens, top_k: usize) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();

    for (keyword, courses) in COURSE_MAPPING.iter() {
        if !keyword_hits(query, keyword) {
            continue;
        }
        for &course in courses.iter() {
            if !suggestions.contains(&course) {
                suggestions.push(course);
            }
        }
    }

    if suggestions.is_empty() {
        suggestions = GENERIC_COURSES.to_vec();
    }

    suggestions.truncate(top_k);
    suggestions
}

#[inline]
fn keyword_hits(query: &QueryTokens, keyword: &str) -> bool {
    query
        .skills
        .iter()
        .chain(query.interests.iter())
        .any(|token| token.contains(keyword))
}
