pub const TOPIC_PLACEHOLDER: &str = "{topic}";
pub const DIFFICULTY_PLACEHOLDER: &str = "{difficulty}";
pub const COUNT_PLACEHOLDER: &str = "{count}";
pub const SCHEMA_PLACEHOLDER: &str = "{schema}";

pub const QUIZ_GENERATION_PROMPT: &str = "Generate a quiz about {topic} at {difficulty} level with exactly {count} multiple choice questions.
Write new questions; do not repeat questions you have produced before.
Each question must have exactly 4 distinct options with exactly 1 correct answer.
\"correctOptionIndex\" is the zero-based position (0-3) of the correct option in \"options\".

Return ONLY valid JSON with this exact structure, no other text:
{
  \"title\": \"Quiz title\",
  \"description\": \"Quiz description\",
  \"questions\": [
    {
      \"text\": \"Question text\",
      \"options\": [\"Option 1\", \"Option 2\", \"Option 3\", \"Option 4\"],
      \"correctOptionIndex\": 0,
      \"explanation\": \"Explanation for the correct answer\"
    }
  ]
}

The reply must validate against this JSON Schema:
{schema}";
