/// Technology names a portfolio's skills are sampled from.
pub const WEB_SKILLS: [&str; 41] = [
    "Node.js",
    "React",
    "TypeScript",
    "JavaScript",
    "HTML",
    "CSS",
    "SASS",
    "Vue.js",
    "Angular",
    "Express.js",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "GraphQL",
    "Docker",
    "Kubernetes",
    "Git",
    "GitHub",
    "AWS",
    "Azure",
    "Firebase",
    "Next.js",
    "Jest",
    "Mocha",
    "Chai",
    "Redux",
    "Tailwind CSS",
    "Webpack",
    "Babel",
    "Nginx",
    "PHP",
    "Ruby on Rails",
    "Django",
    "Flask",
    "Laravel",
    "Swift",
    "Kotlin",
    "Flutter",
    "Java",
    "C#",
    "Python",
];

pub const PLACEHOLDER_IMAGES: [&str; 3] = [
    "https://via.placeholder.com/600x400.png?text=Image+1",
    "https://via.placeholder.com/600x400.png?text=Image+2",
    "https://via.placeholder.com/600x400.png?text=Image+3",
];

pub const MIN_SKILLS: usize = 3;
pub const MAX_SKILLS: usize = 7;

pub fn is_known_skill(skill: &str) -> bool {
    WEB_SKILLS.contains(&skill)
}
