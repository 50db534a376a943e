//! Sample catalogue for local development.
//!
//! Seeding only runs against an empty tryout collection, so restarting a
//! seeded instance never duplicates data.

use tryout_core::types::EntityId;

use crate::models::question::QuestionInput;
use crate::models::tryout::TryoutInput;
use crate::store::{EntityStore, StoreResult};

struct SampleTryout {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    duration: i32,
    questions: &'static [(&'static str, bool)],
}

const SAMPLE_TRYOUTS: &[SampleTryout] = &[
    SampleTryout {
        title: "Basic Mathematics Quiz",
        description: "Arithmetic, algebra and geometry fundamentals for high school students.",
        category: "Mathematics",
        duration: 30,
        questions: &[
            ("The square root of 144 is 12.", true),
            ("The sum of all angles in a triangle is 180 degrees.", true),
            ("The area of a circle is given by πr.", false),
            ("π is exactly 22/7.", false),
        ],
    },
    SampleTryout {
        title: "Advanced Calculus Challenge",
        description: "Limits, derivatives, integrals and series at college level.",
        category: "Mathematics",
        duration: 60,
        questions: &[
            ("The derivative of e^x is e^x.", true),
            ("The integral of 1/x is ln|x| + C.", true),
            ("L'Hôpital's rule applies to every indeterminate form.", false),
        ],
    },
    SampleTryout {
        title: "English Grammar Challenge",
        description: "Punctuation, sentence structure, verb tenses and common usage errors.",
        category: "Language",
        duration: 45,
        questions: &[
            ("A semicolon can join two independent clauses.", true),
            ("The past participle of 'go' is 'went'.", false),
        ],
    },
    SampleTryout {
        title: "Science Fundamentals",
        description: "Core concepts across physics, chemistry and biology.",
        category: "Science",
        duration: 60,
        questions: &[
            ("Mitochondria are known as the powerhouse of the cell.", true),
            ("Water's chemical formula is H2O2.", false),
            ("Sound travels faster in air than in water.", false),
        ],
    },
    SampleTryout {
        title: "World History Overview",
        description: "Major events, civilizations and figures from antiquity to today.",
        category: "History",
        duration: 40,
        questions: &[
            ("The Berlin Wall fell in 1989.", true),
            ("World War II ended in 1950.", false),
        ],
    },
    SampleTryout {
        title: "Computer Science Basics",
        description: "Algorithms, data structures and basic programming principles.",
        category: "Computer Science",
        duration: 50,
        questions: &[
            ("The decimal number 10 is 1010 in binary.", true),
            ("HTML is a programming language.", false),
            ("O(n²) denotes quadratic time complexity.", true),
        ],
    },
    SampleTryout {
        title: "Geography Challenge",
        description: "Countries, capitals, landmarks and physical geography.",
        category: "Geography",
        duration: 35,
        questions: &[],
    },
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tryouts: usize,
    pub questions: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.tryouts == 0
    }
}

/// Insert the sample catalogue if the store holds no tryouts.
///
/// Returns an empty report when data already exists.
pub async fn seed_if_empty(store: &dyn EntityStore) -> StoreResult<SeedReport> {
    let existing = store.count_tryouts().await?;
    if existing > 0 {
        tracing::info!(existing, "Tryouts already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();
    for sample in SAMPLE_TRYOUTS {
        let tryout = store
            .create_tryout(&TryoutInput {
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                category: sample.category.to_string(),
                duration: sample.duration,
            })
            .await?;
        report.tryouts += 1;
        report.questions += seed_questions(store, tryout.id, sample.questions).await?;
    }

    tracing::info!(
        tryouts = report.tryouts,
        questions = report.questions,
        "Seeded sample data"
    );
    Ok(report)
}

async fn seed_questions(
    store: &dyn EntityStore,
    tryout_id: EntityId,
    questions: &[(&str, bool)],
) -> StoreResult<usize> {
    for (text, is_true) in questions {
        store
            .create_question(
                tryout_id,
                &QuestionInput {
                    text: (*text).to_string(),
                    is_true: *is_true,
                },
            )
            .await?;
    }
    Ok(questions.len())
}
