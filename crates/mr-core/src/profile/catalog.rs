/// Residential complexes offered by the apartment step.
pub const RESIDENTIAL_COMPLEXES: [&str; 8] = [
    "ЖК Душанбе Сити",
    "ЖК Сомон",
    "ЖК Ориёна",
    "ЖК Сарват",
    "ЖК Истиқлол",
    "ЖК Паёми",
    "ЖК Рудакӣ",
    "ЖК Навруз",
];

pub fn is_known_complex(name: &str) -> bool {
    RESIDENTIAL_COMPLEXES.contains(&name)
}
