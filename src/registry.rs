//! 呼び出し可能なツールの静的テーブル。
//!
//! ツールはプロセス起動時から固定で、実行中に追加・削除されることはない。
//! ホスト側は名前でツールを引き、JSON オブジェクトの引数を渡して [`invoke`] を呼ぶ。

use crate::error::{Result, ToolError};
use crate::operations::{self, DEFAULT_GREETING};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value as JsonValue};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Integer,
    Float,
    String,
}

impl ParamType {
    fn as_str(self) -> &'static str {
        match self {
            ParamType::Integer => "an integer",
            ParamType::Float => "a number",
            ParamType::String => "a string",
        }
    }

    pub fn schema_type(self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::Float => "number",
            ParamType::String => "string",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: ParamType,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl Parameter {
    const fn required(name: &'static str, ty: ParamType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            description,
            default: None,
        }
    }
}

pub type Handler = fn(&Arguments<'_>) -> Result<Value>;

#[derive(Clone, Copy, Serialize)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [Parameter],
    #[serde(rename = "return_type")]
    pub returns: ParamType,
    #[serde(skip)]
    handler: Handler,
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("returns", &self.returns)
            .finish()
    }
}

impl Operation {
    pub fn call(&self, arguments: &Map<String, JsonValue>) -> Result<Value> {
        (self.handler)(&Arguments::new(self.parameters, arguments))
    }

    /// パラメータ定義から JSON Schema を組み立てる。デフォルトを持つものは必須にしない。
    pub fn input_schema(&self) -> Map<String, JsonValue> {
        let mut properties = Map::new();
        for parameter in self.parameters {
            let mut property = json!({
                "type": parameter.ty.schema_type(),
                "description": parameter.description,
            });
            if let Some(default) = parameter.default {
                property["default"] = json!(default);
            }
            properties.insert(parameter.name.to_string(), property);
        }

        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.default.is_none())
            .map(|p| p.name)
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), JsonValue::Object(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }
}

/// ツールの戻り値
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(BigInt),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

// i64 に収まらない整数は JSON 数値で表せないので10進文字列にする
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => match i64::try_from(n) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.serialize_str(&n.to_string()),
            },
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// JSON オブジェクトの引数を型付きで取り出すためのビュー
pub struct Arguments<'a> {
    parameters: &'static [Parameter],
    values: &'a Map<String, JsonValue>,
}

impl<'a> Arguments<'a> {
    pub fn new(parameters: &'static [Parameter], values: &'a Map<String, JsonValue>) -> Self {
        Self { parameters, values }
    }

    fn get(&self, name: &str) -> Option<&'a JsonValue> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    fn require(&self, name: &str) -> Result<&'a JsonValue> {
        self.get(name).ok_or_else(|| ToolError::missing_argument(name))
    }

    /// JSON の整数は i64 / u64 の範囲まで正確に受け取る
    pub fn integer(&self, name: &str) -> Result<BigInt> {
        let value = self.require(name)?;
        value
            .as_i64()
            .map(BigInt::from)
            .or_else(|| value.as_u64().map(BigInt::from))
            .ok_or_else(|| mismatch(name, ParamType::Integer, value))
    }

    pub fn float(&self, name: &str) -> Result<f64> {
        let value = self.require(name)?;
        value
            .as_f64()
            .ok_or_else(|| mismatch(name, ParamType::Float, value))
    }

    pub fn string(&self, name: &str) -> Result<&'a str> {
        let value = self.require(name)?;
        value
            .as_str()
            .ok_or_else(|| mismatch(name, ParamType::String, value))
    }

    /// 省略された場合はパラメータ定義のデフォルト値を返す
    pub fn optional_string(&self, name: &str) -> Result<&'a str> {
        match self.get(name) {
            Some(_) => self.string(name),
            None => self
                .parameters
                .iter()
                .find(|p| p.name == name)
                .and_then(|p| p.default)
                .ok_or_else(|| ToolError::missing_argument(name)),
        }
    }
}

fn mismatch(name: &str, expected: ParamType, found: &JsonValue) -> ToolError {
    let found = match found {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a floating-point number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    };
    ToolError::TypeMismatch {
        parameter: name.to_string(),
        expected: expected.as_str(),
        found,
    }
}

const INT_PAIR: &[Parameter] = &[
    Parameter::required("a", ParamType::Integer, "First operand"),
    Parameter::required("b", ParamType::Integer, "Second operand"),
];

const FLOAT_PAIR: &[Parameter] = &[
    Parameter::required("a", ParamType::Float, "Dividend"),
    Parameter::required("b", ParamType::Float, "Divisor (must not be zero)"),
];

const GREET_PARAMS: &[Parameter] = &[
    Parameter::required("name", ParamType::String, "Name of the person to greet"),
    Parameter {
        name: "greeting",
        ty: ParamType::String,
        description: "Greeting word placed before the name",
        default: Some(DEFAULT_GREETING),
    },
];

const FACTORIAL_PARAMS: &[Parameter] = &[Parameter::required(
    "n",
    ParamType::Integer,
    "Non-negative integer",
)];

pub static OPERATIONS: &[Operation] = &[
    Operation {
        name: "add",
        description: "Add two numbers together",
        parameters: INT_PAIR,
        returns: ParamType::Integer,
        handler: add,
    },
    Operation {
        name: "subtract",
        description: "Subtract second number from first number",
        parameters: INT_PAIR,
        returns: ParamType::Integer,
        handler: subtract,
    },
    Operation {
        name: "multiply",
        description: "Multiply two numbers together",
        parameters: INT_PAIR,
        returns: ParamType::Integer,
        handler: multiply,
    },
    Operation {
        name: "divide",
        description: "Divide first number by second number",
        parameters: FLOAT_PAIR,
        returns: ParamType::Float,
        handler: divide,
    },
    Operation {
        name: "greet",
        description: "Greet someone with a customizable greeting",
        parameters: GREET_PARAMS,
        returns: ParamType::String,
        handler: greet,
    },
    Operation {
        name: "calculate_factorial",
        description: "Calculate the factorial of a positive integer",
        parameters: FACTORIAL_PARAMS,
        returns: ParamType::Integer,
        handler: calculate_factorial,
    },
];

fn add(args: &Arguments<'_>) -> Result<Value> {
    let sum = operations::add(&args.integer("a")?, &args.integer("b")?);
    Ok(Value::Integer(sum))
}

fn subtract(args: &Arguments<'_>) -> Result<Value> {
    let difference = operations::subtract(&args.integer("a")?, &args.integer("b")?);
    Ok(Value::Integer(difference))
}

fn multiply(args: &Arguments<'_>) -> Result<Value> {
    let product = operations::multiply(&args.integer("a")?, &args.integer("b")?);
    Ok(Value::Integer(product))
}

fn divide(args: &Arguments<'_>) -> Result<Value> {
    operations::divide(args.float("a")?, args.float("b")?).map(Value::Float)
}

fn greet(args: &Arguments<'_>) -> Result<Value> {
    let name = args.string("name")?;
    let greeting = args.optional_string("greeting")?;
    Ok(Value::Text(operations::greet(name, Some(greeting))))
}

fn calculate_factorial(args: &Arguments<'_>) -> Result<Value> {
    operations::calculate_factorial(&args.integer("n")?).map(|n| Value::Integer(n.into()))
}

pub fn list_operations() -> &'static [Operation] {
    OPERATIONS
}

pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

pub fn invoke(name: &str, arguments: &Map<String, JsonValue>) -> Result<Value> {
    let operation = find(name).ok_or_else(|| ToolError::UnknownOperation(name.to_string()))?;
    operation.call(arguments)
}
