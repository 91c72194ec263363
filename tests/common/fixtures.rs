use serde_json::{Value, json};

/// A complete resume touching every registered section.
pub fn full_resume() -> Value {
    json!({
        "basics": {
            "name": "Ada Lin",
            "label": "Systems Engineer",
            "email": "ada@example.com",
            "phone": "555-0100",
            "url": "https://ada.dev",
            "summary": "Builds reliable infrastructure.",
            "location": {"city": "Bergen", "region": "Vestland"},
            "profiles": [
                {"network": "GitHub", "username": "adalin", "url": "https://github.com/adalin"}
            ]
        },
        "work": [{
            "company": "Fjord Systems",
            "position": "Staff Engineer",
            "location": "Bergen",
            "startDate": "2020-01",
            "endDate": "Present",
            "highlights": ["Led storage rewrite", "Mentored four engineers"]
        }],
        "volunteer": [{
            "organization": "Code Club",
            "position": "Mentor",
            "startDate": "2018",
            "endDate": "2020",
            "summary": "Taught programming to kids."
        }],
        "education": [{
            "institution": "University of Bergen",
            "url": "https://uib.no",
            "area": "Informatics",
            "studyType": "MSc",
            "startDate": "2014",
            "endDate": "2016",
            "score": "A",
            "courses": ["Compilers", "Distributed Systems"]
        }],
        "awards": [{"title": "Engineer of the Year", "awarder": "Fjord Systems", "date": "2022"}],
        "publications": [{
            "name": "Lazy Layout",
            "publisher": "ACM",
            "releaseDate": "2021",
            "url": "https://doi.example/lazy"
        }],
        "skills": [{"name": "Languages", "keywords": ["Rust", "Go", "SQL"]}],
        "languages": [{"language": "Norwegian", "fluency": "Native"}],
        "interests": [{"name": "Outdoors", "keywords": ["Hiking", "Sailing"]}],
        "references": [{"name": "K. Berg", "reference": "Ada is exceptional."}],
        "projects": [{"name": "vitae", "description": "Resume engine.", "highlights": ["Typed"]}]
    })
}

/// Titles of `full_resume` in record order.
pub const FULL_RESUME_TITLES: [&str; 10] = [
    "EXPERIENCE",
    "VOLUNTEER",
    "EDUCATION",
    "AWARDS",
    "PUBLICATIONS",
    "SKILLS",
    "LANGUAGES",
    "INTERESTS",
    "REFERENCES",
    "PROJECTS",
];

pub fn minimal_resume() -> Value {
    json!({"basics": {"name": "A. Lin", "email": "a@x.com"}, "skills": []})
}
