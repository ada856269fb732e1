//! Question templates per archetype
//!
//! Each archetype owns a fixed, ordered template list. `{topic}` is the
//! single substitution slot; some templates are topic-free follow-ups.

use crate::taxonomy::ArchetypeCode;

/// Substitution slot for the topic text
pub const TOPIC_SLOT: &str = "{topic}";

/// Ordered templates for an archetype
pub fn templates_for(code: ArchetypeCode) -> &'static [&'static str] {
    match code {
        ArchetypeCode::Mseo => &[
            "Какие базовые материалы используются в {topic}?",
            "Из каких элементов состоит {topic}?",
            "Какие физические свойства важны для {topic}?",
        ],
        ArchetypeCode::Msef => &[
            "Какие сыпучие или неупорядоченные материалы присутствуют в {topic}?",
            "Какие гранулированные вещества связаны с {topic}?",
        ],
        ArchetypeCode::Msco => &[
            "Какие сооружения и структуры составляют {topic}?",
            "Какая архитектура характерна для {topic}?",
            "Какие типы зданий встречаются в {topic}?",
            "Какие исторические архитектурные стили представлены?",
            "Какие современные архитектурные решения используются?",
            "Какие знаковые здания и памятники есть?",
        ],
        ArchetypeCode::Mscf => &[
            "Какая природная среда окружает {topic}?",
            "Как ландшафт интегрирован в {topic}?",
            "Какие экосистемы связаны с {topic}?",
            "Какие природные особенности характерны?",
        ],
        ArchetypeCode::Mdeo => &[
            "Какие базовые механизмы обеспечивают работу {topic}?",
            "Какие инфраструктурные элементы необходимы для {topic}?",
            "Какие простые устройства используются?",
        ],
        ArchetypeCode::Mdef => &[
            "Кто населяет или использует {topic}?",
            "Какие живые существа связаны с {topic}?",
            "Какая демография характерна для {topic}?",
            "Какой этнический и культурный состав?",
        ],
        ArchetypeCode::Mdco => &[
            "Какие технические системы функционируют в {topic}?",
            "Какой транспорт используется в {topic}?",
            "Какие машины и оборудование присутствуют?",
            "Какие транспортные системы развиты?",
            "Какая техническая инфраструктура существует?",
        ],
        ArchetypeCode::Mdcf => &[
            "Как {topic} функционирует как сложная система?",
            "Какова динамика и потоки в {topic}?",
            "Как организованы части {topic}?",
            "Какие процессы происходят в системе?",
            "Как части взаимодействуют между собой?",
        ],
        ArchetypeCode::Aseo => &[
            "Какие ключевые показатели характеризуют {topic}?",
            "Какие статистические данные доступны по {topic}?",
            "Какие константы и факты определяют {topic}?",
            "Какие числовые характеристики важны?",
            "Какие измеримые параметры существуют?",
        ],
        ArchetypeCode::Asef => &[
            "Какие символы и образы ассоциируются с {topic}?",
            "Какие эмоции и ощущения вызывает {topic}?",
            "Какая символика связана с {topic}?",
            "Какие культурные архетипы проявляются?",
        ],
        ArchetypeCode::Asco => &[
            "Какие теории применимы к {topic}?",
            "Какие научные концепции объясняют {topic}?",
            "Какие модели описывают {topic}?",
            "Какие теоретические основы существуют?",
        ],
        ArchetypeCode::Ascf => &[
            "Какая культура характерна для {topic}?",
            "Какие традиции связаны с {topic}?",
            "Какое искусство представлено в {topic}?",
            "Какая культурная жизнь развита?",
            "Какие традиции и обычаи существуют?",
            "Какие культурные особенности проявляются?",
        ],
        ArchetypeCode::Adeo => &[
            "Какие процедуры и алгоритмы используются в {topic}?",
            "Как планируется и управляется {topic}?",
            "Какие процессы протекают в {topic}?",
            "Какие методы управления применяются?",
        ],
        ArchetypeCode::Adef => &[
            "Какая атмосфера характерна для {topic}?",
            "Каков 'дух' или идентичность {topic}?",
            "Какие неосязаемые качества определяют {topic}?",
            "Какое общее впечатление производит?",
        ],
        ArchetypeCode::Adco => &[
            "Какие программные системы используются в {topic}?",
            "Какова цифровизация {topic}?",
            "Какие алгоритмические системы управляют {topic}?",
            "Какие IT-системы развиты?",
            "Какие цифровые решения применяются?",
        ],
        ArchetypeCode::Adcf => &[
            "Какие социальные процессы происходят в {topic}?",
            "Какова социальная динамика {topic}?",
            "Как общество организовано в {topic}?",
            "Какие экономические процессы происходят?",
            "Какая политическая ситуация?",
            "Какие социальные явления наблюдаются?",
        ],
    }
}

/// Fill the topic slot of a template
pub fn render(template: &str, topic: &str) -> String {
    template.replace(TOPIC_SLOT, topic)
}
