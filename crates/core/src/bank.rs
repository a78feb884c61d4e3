//! Question bank - the static list of quiz items
//!
//! The built-in bank presents AWS services as fictional Japanese full names.
//! A replacement bank can be parsed from JSON; parsed banks are validated so
//! the state machine can rely on every item having two distinct options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// What is shown as the question (the "name" in the built-in bank).
    #[serde(alias = "name")]
    pub prompt: String,
    pub correct: String,
    pub incorrect: String,
    #[serde(default)]
    pub explanation: String,
}

impl QuizItem {
    pub fn new(prompt: &str, correct: &str, incorrect: &str, explanation: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            correct: correct.to_string(),
            incorrect: incorrect.to_string(),
            explanation: explanation.to_string(),
        }
    }

    fn validate(&self, index: usize) -> Result<(), BankError> {
        let reason = if self.prompt.trim().is_empty() {
            Some("empty prompt")
        } else if self.correct.trim().is_empty() || self.incorrect.trim().is_empty() {
            Some("empty option")
        } else if self.correct == self.incorrect {
            Some("correct and incorrect options are identical")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(BankError::InvalidItem { index, reason }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank is empty")]
    Empty,
    #[error("question {index} is invalid: {reason}")]
    InvalidItem { index: usize, reason: &'static str },
}

/// Immutable list of quiz items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    items: Vec<QuizItem>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty banks and malformed items.
    pub fn from_items(items: Vec<QuizItem>) -> Result<Self, BankError> {
        if items.is_empty() {
            return Err(BankError::Empty);
        }
        for (i, item) in items.iter().enumerate() {
            item.validate(i)?;
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of items.
    ///
    /// ```
    /// use tui_quiz_core::QuestionBank;
    ///
    /// let bank = QuestionBank::from_json_str(
    ///     r#"[{"name": "Q", "correct": "A", "incorrect": "B", "explanation": "because"}]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(bank.len(), 1);
    /// assert_eq!(bank.get(0).unwrap().prompt, "Q");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let items: Vec<QuizItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// The bank shipped with the game.
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN
                .iter()
                .map(|(p, c, i, e)| QuizItem::new(p, c, i, e))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// (prompt, correct, incorrect, explanation)
const BUILTIN: [(&str, &str, &str, &str); 18] = [
    (
        "高橋 龍",
        "Amazon EC2",
        "Amazon Lightsail",
        "高橋 (Takahashi) means 'high bridge', representing the connection to the cloud. 龍 (Ryu) means 'dragon', symbolizing EC2's powerful computing capabilities.",
    ),
    (
        "水野 清",
        "Amazon RDS",
        "Amazon DynamoDB",
        "水野 (Mizuno) contains 水 (water), while 清 (Sei) means 'clear/pure', representing how RDS handles data flow like a well-managed stream of information.",
    ),
    (
        "雲井 保",
        "Amazon S3",
        "Amazon EBS",
        "雲井 (Kumoi) contains 雲 (cloud), and 保 (Tamotsu) means 'to protect/preserve', representing S3's role in securely storing data in the cloud.",
    ),
    (
        "早河 道",
        "Amazon CloudFront",
        "Amazon Route 53",
        "早河 (Hayakawa) contains 早 (fast) and 河 (river), while 道 (Michi) means 'path/road', representing CloudFront's fast content delivery network.",
    ),
    (
        "監物 晴",
        "Amazon CloudWatch",
        "AWS Config",
        "監物 (Kenmotsu) contains 監 (supervise), and 晴 (Haru) means 'clear/bright', representing CloudWatch's monitoring capabilities that provide clear insights.",
    ),
    (
        "壁川 守",
        "AWS WAF",
        "AWS Shield",
        "壁川 (Kabekawa) contains 壁 (wall), and 守 (Mamoru) means 'to protect', representing WAF's role as a web application firewall that guards against threats.",
    ),
    (
        "氷室 永",
        "Amazon Glacier",
        "AWS Backup",
        "氷室 (Himuro) means 'ice room', and 永 (Hisashi) means 'eternal/long-lasting', representing Glacier's long-term cold storage capabilities.",
    ),
    (
        "関 計",
        "AWS Lambda",
        "AWS Fargate",
        "関 (Seki) means 'related/connection', and 計 (Kei) means 'calculate/measure', representing Lambda's function-based serverless computing.",
    ),
    (
        "智野 探",
        "Amazon Athena",
        "Amazon Redshift",
        "智野 (Tomono) contains 智 (wisdom), and 探 (Sagasu) means 'to search/explore', representing Athena's intelligent query service named after the Greek goddess of wisdom.",
    ),
    (
        "桜井 器",
        "Amazon ECS",
        "Amazon EKS",
        "桜井 (Sakurai) is a common Japanese surname, while 器 (Utsuwa) means 'container', representing Amazon ECS (Elastic Container Service).",
    ),
    (
        "森 賢",
        "Amazon SageMaker",
        "Amazon Comprehend",
        "森 (Mori) means 'forest', and 賢 (Ken) means 'wisdom/intelligence', representing SageMaker's role in bringing wisdom (sage) and creating value from data forests.",
    ),
    (
        "大野 無",
        "Amazon Aurora",
        "Amazon Neptune",
        "大野 (Ohno) means 'big field', and 無 (Mu) means 'nothingness/infinity', representing Aurora's vast scalability and performance capabilities.",
    ),
    (
        "渡辺 信",
        "Amazon SNS",
        "Amazon SQS",
        "渡辺 (Watanabe) contains 渡 (to cross/transmit), and 信 (Shin) means 'message/trust', representing SNS's role in message transmission and notifications.",
    ),
    (
        "鍵山 秘",
        "AWS KMS",
        "AWS Secrets Manager",
        "鍵山 (Kagiyama) contains 鍵 (key), and 秘 (Hi) means 'secret', representing KMS's role in key management and encryption.",
    ),
    (
        "橋本 連",
        "AWS Step Functions",
        "AWS AppFlow",
        "橋本 (Hashimoto) contains 橋 (bridge), and 連 (Ren) means 'connect/link', representing Step Functions' role in coordinating multiple AWS services.",
    ),
    (
        "小川 流",
        "Amazon Kinesis",
        "Amazon MSK",
        "小川 (Ogawa) means 'small river', and 流 (Ryu) means 'flow/stream', representing Kinesis's role in real-time data streaming.",
    ),
    (
        "山田 索",
        "Amazon Elasticsearch",
        "Amazon CloudSearch",
        "山田 (Yamada) is a common Japanese surname, and 索 (Saku) means 'search', representing Elasticsearch's powerful search capabilities.",
    ),
    (
        "石川 築",
        "AWS CloudFormation",
        "AWS CDK",
        "石川 (Ishikawa) contains 石 (stone), and 築 (Chiku) means 'build/construct', representing CloudFormation's role in building infrastructure.",
    ),
];
