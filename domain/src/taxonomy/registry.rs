//! Taxonomy registry: the fixed table of 16 archetypes.
//!
//! The table is build-time configuration data held in a `static`; it is
//! never mutated. Canonical order is four quadrants of four, grouped by
//! materiality + dynamics (MS, MD, AS, AD).

use super::archetype::{Archetype, ArchetypeCode, Quadrant};
use super::axis::{Dynamics, Materiality, Scale, Structure};
use crate::core::error::DomainError;

/// All 16 archetypes in canonical order.
pub fn all() -> &'static [Archetype] {
    &ARCHETYPES
}

/// All archetype codes in canonical order.
pub fn codes() -> Vec<ArchetypeCode> {
    ARCHETYPES.iter().map(|a| a.code).collect()
}

/// Look up an archetype by its 4-letter code.
pub fn by_code(code: &str) -> Result<&'static Archetype, DomainError> {
    let code: ArchetypeCode = code.parse()?;
    Ok(get(code))
}

/// Infallible lookup for an already-validated code.
pub fn get(code: ArchetypeCode) -> &'static Archetype {
    &ARCHETYPES[code.index()]
}

/// Archetypes whose default priority is at least `min_priority`, canonical order preserved.
pub fn filter_by_priority(min_priority: u8) -> Vec<&'static Archetype> {
    ARCHETYPES
        .iter()
        .filter(|a| a.default_priority >= min_priority)
        .collect()
}

pub fn quadrant_of(archetype: &Archetype) -> Quadrant {
    archetype.quadrant()
}

/// Archetypes of one quadrant, canonical order preserved.
pub fn by_quadrant(quadrant: Quadrant) -> Vec<&'static Archetype> {
    ARCHETYPES
        .iter()
        .filter(|a| a.quadrant() == quadrant)
        .collect()
}

static ARCHETYPES: [Archetype; 16] = [
    // ==================== Material / Static (MS) ====================
    Archetype {
        code: ArchetypeCode::Mseo,
        name_ru: "Кристалл",
        name_en: "Crystal",
        description: "Простая физическая структура с четким порядком",
        materiality: Materiality::Material,
        dynamics: Dynamics::Static,
        scale: Scale::Elementary,
        structure: Structure::Ordered,
        keywords_ru: &["материал", "элемент", "вещество", "атом", "молекула", "химический элемент"],
        keywords_en: &["material", "element", "substance", "atom", "molecule", "chemical element"],
        examples: &["Железо", "Золото", "Кремний", "Кристаллы", "Простые молекулы"],
        default_priority: 2,
    },
    Archetype {
        code: ArchetypeCode::Msef,
        name_ru: "Песок",
        name_en: "Sand",
        description: "Простые физические частицы без порядка",
        materiality: Materiality::Material,
        dynamics: Dynamics::Static,
        scale: Scale::Elementary,
        structure: Structure::Fluid,
        keywords_ru: &["песок", "порошок", "гранулы", "частицы", "сыпучее"],
        keywords_en: &["sand", "powder", "granules", "particles", "bulk material"],
        examples: &["Песок", "Пыль", "Зерно", "Порошковые вещества"],
        default_priority: 1,
    },
    Archetype {
        code: ArchetypeCode::Msco,
        name_ru: "Здание",
        name_en: "Building",
        description: "Сложная структура с четкой архитектурой",
        materiality: Materiality::Material,
        dynamics: Dynamics::Static,
        scale: Scale::Complex,
        structure: Structure::Ordered,
        keywords_ru: &["здание", "сооружение", "архитектура", "структура", "конструкция", "объект"],
        keywords_en: &["building", "structure", "architecture", "construction", "edifice"],
        examples: &["Здания", "Мосты", "Памятники", "Инфраструктура"],
        default_priority: 5,
    },
    Archetype {
        code: ArchetypeCode::Mscf,
        name_ru: "Лес",
        name_en: "Forest",
        description: "Сложная природная система, медленно меняющаяся",
        materiality: Materiality::Material,
        dynamics: Dynamics::Static,
        scale: Scale::Complex,
        structure: Structure::Fluid,
        keywords_ru: &["природа", "ландшафт", "экосистема", "среда", "местность", "территория"],
        keywords_en: &["nature", "landscape", "ecosystem", "environment", "terrain", "territory"],
        examples: &["Леса", "Горы", "Реки", "Природные ландшафты"],
        default_priority: 3,
    },
    // ==================== Material / Dynamic (MD) ====================
    Archetype {
        code: ArchetypeCode::Mdeo,
        name_ru: "Механизм",
        name_en: "Mechanism",
        description: "Простое устройство с движущимися частями",
        materiality: Materiality::Material,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Elementary,
        structure: Structure::Ordered,
        keywords_ru: &["механизм", "устройство", "инструмент", "деталь", "компонент"],
        keywords_en: &["mechanism", "device", "tool", "part", "component"],
        examples: &["Рычаг", "Шестерня", "Пружина", "Простые механизмы"],
        default_priority: 2,
    },
    Archetype {
        code: ArchetypeCode::Mdef,
        name_ru: "Организм",
        name_en: "Organism",
        description: "Живое существо с органической адаптивностью",
        materiality: Materiality::Material,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Elementary,
        structure: Structure::Fluid,
        keywords_ru: &["организм", "существо", "животное", "растение", "жизнь", "биология"],
        keywords_en: &["organism", "creature", "animal", "plant", "life", "biology"],
        examples: &["Животные", "Растения", "Микроорганизмы", "Люди"],
        default_priority: 4,
    },
    Archetype {
        code: ArchetypeCode::Mdco,
        name_ru: "Машина",
        name_en: "Machine",
        description: "Сложная техническая система с алгоритмами работы",
        materiality: Materiality::Material,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Complex,
        structure: Structure::Ordered,
        keywords_ru: &["машина", "техника", "система", "оборудование", "транспорт", "устройство"],
        keywords_en: &["machine", "equipment", "system", "apparatus", "transport", "device"],
        examples: &["Автомобили", "Самолеты", "Роботы", "Фабрики"],
        default_priority: 5,
    },
    Archetype {
        code: ArchetypeCode::Mdcf,
        name_ru: "Город",
        name_en: "City",
        description: "Сложная живая система с органическим развитием",
        materiality: Materiality::Material,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Complex,
        structure: Structure::Fluid,
        keywords_ru: &["город", "система", "динамика", "поток", "процесс", "изменение"],
        keywords_en: &["city", "system", "dynamics", "flow", "process", "change"],
        examples: &["Города", "Муравейники", "Океанические течения"],
        default_priority: 5,
    },
    // ==================== Abstract / Static (AS) ====================
    Archetype {
        code: ArchetypeCode::Aseo,
        name_ru: "Аксиома",
        name_en: "Axiom",
        description: "Фундаментальная истина, неизменный факт",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Static,
        scale: Scale::Elementary,
        structure: Structure::Ordered,
        keywords_ru: &["факт", "данные", "статистика", "число", "константа", "показатель"],
        keywords_en: &["fact", "data", "statistics", "number", "constant", "indicator"],
        examples: &["Математические константы", "Физические законы", "Статистика"],
        default_priority: 4,
    },
    Archetype {
        code: ArchetypeCode::Asef,
        name_ru: "Архетип",
        name_en: "Archetype",
        description: "Базовый паттерн без четких границ",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Static,
        scale: Scale::Elementary,
        structure: Structure::Fluid,
        keywords_ru: &["символ", "образ", "паттерн", "эмоция", "ощущение", "смысл"],
        keywords_en: &["symbol", "image", "pattern", "emotion", "feeling", "meaning"],
        examples: &["Эмоции", "Архетипы Юнга", "Символы", "Цвета"],
        default_priority: 3,
    },
    Archetype {
        code: ArchetypeCode::Asco,
        name_ru: "Теория",
        name_en: "Theory",
        description: "Структурированная система знаний",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Static,
        scale: Scale::Complex,
        structure: Structure::Ordered,
        keywords_ru: &["теория", "наука", "концепция", "модель", "система знаний", "учение"],
        keywords_en: &["theory", "science", "concept", "model", "knowledge system", "doctrine"],
        examples: &["Научные теории", "Философские учения", "Математические системы"],
        default_priority: 3,
    },
    Archetype {
        code: ArchetypeCode::Ascf,
        name_ru: "Культура",
        name_en: "Culture",
        description: "Сложная система ценностей и традиций",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Static,
        scale: Scale::Complex,
        structure: Structure::Fluid,
        keywords_ru: &["культура", "традиция", "искусство", "религия", "обычай", "ценность"],
        keywords_en: &["culture", "tradition", "art", "religion", "custom", "value"],
        examples: &["Культура народов", "Религии", "Мифология", "Искусство"],
        default_priority: 5,
    },
    // ==================== Abstract / Dynamic (AD) ====================
    Archetype {
        code: ArchetypeCode::Adeo,
        name_ru: "Алгоритм",
        name_en: "Algorithm",
        description: "Пошаговая процедура с детерминированным выполнением",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Elementary,
        structure: Structure::Ordered,
        keywords_ru: &["алгоритм", "процедура", "метод", "правило", "протокол", "инструкция"],
        keywords_en: &["algorithm", "procedure", "method", "rule", "protocol", "instruction"],
        examples: &["Алгоритмы", "Рецепты", "Процедуры", "Протоколы"],
        default_priority: 2,
    },
    Archetype {
        code: ArchetypeCode::Adef,
        name_ru: "Интуиция",
        name_en: "Intuition",
        description: "Спонтанный мыслительный процесс",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Elementary,
        structure: Structure::Fluid,
        keywords_ru: &["мысль", "идея", "интуиция", "вдохновение", "творчество", "озарение"],
        keywords_en: &["thought", "idea", "intuition", "inspiration", "creativity", "insight"],
        examples: &["Идеи", "Мысли", "Импровизация", "Инсайты"],
        default_priority: 2,
    },
    Archetype {
        code: ArchetypeCode::Adco,
        name_ru: "Программа",
        name_en: "Program",
        description: "Сложная система алгоритмов",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Complex,
        structure: Structure::Ordered,
        keywords_ru: &["программа", "план", "проект", "стратегия", "система", "разработка"],
        keywords_en: &["program", "plan", "project", "strategy", "system", "development"],
        examples: &["Программное обеспечение", "Планы развития", "Проекты"],
        default_priority: 3,
    },
    Archetype {
        code: ArchetypeCode::Adcf,
        name_ru: "Общество",
        name_en: "Society",
        description: "Сложная социальная динамика",
        materiality: Materiality::Abstract,
        dynamics: Dynamics::Dynamic,
        scale: Scale::Complex,
        structure: Structure::Fluid,
        keywords_ru: &["общество", "социум", "экономика", "политика", "рынок", "сообщество"],
        keywords_en: &["society", "community", "economy", "politics", "market", "social"],
        examples: &["Общество", "Экономика", "Политические процессы", "Социальные движения"],
        default_priority: 5,
    },
];
