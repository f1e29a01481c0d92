//! JSON wire shape of [`Error`].
//!
//! Known fields use camelCase keys. Extensions are flattened next to them at the
//! same object level rather than nested under their own key, and any unknown key
//! read back becomes an extension. `null` and absent fields mean "unset".

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::{Error, ErrorData};

const MESSAGE: &str = "message";
const TITLE: &str = "title";
const ERROR_CODE: &str = "errorCode";
const IDENTIFIER: &str = "identifier";
const INNER_ERROR: &str = "innerError";
const STACK_TRACE: &str = "stackTrace";

const KNOWN_KEYS: [&str; 6] = [MESSAGE, TITLE, ERROR_CODE, IDENTIFIER, INNER_ERROR, STACK_TRACE];

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(MESSAGE, self.message())?;
        if let Some(trace) = self.stack_trace() {
            map.serialize_entry(STACK_TRACE, trace)?;
        }
        if let Some(code) = self.error_code() {
            map.serialize_entry(ERROR_CODE, &code)?;
        }
        if let Some(identifier) = self.identifier() {
            map.serialize_entry(IDENTIFIER, identifier)?;
        }
        map.serialize_entry(TITLE, self.title())?;
        if let Some(inner) = self.inner_error() {
            map.serialize_entry(INNER_ERROR, inner)?;
        }
        for (key, value) in self.extensions().iter() {
            if !KNOWN_KEYS.contains(&key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Error::from_wire_object(object).map_err(de::Error::custom)
    }
}

impl Error {
    fn from_wire_object(object: Map<String, Value>) -> Result<Self, String> {
        let mut data = ErrorData::default();

        for (key, value) in object {
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                MESSAGE => data.message = expect_string(MESSAGE, value)?,
                TITLE => data.title = expect_string(TITLE, value)?,
                IDENTIFIER => data.identifier = Some(expect_string(IDENTIFIER, value)?),
                STACK_TRACE => data.stack_trace = Some(expect_string(STACK_TRACE, value)?),
                ERROR_CODE => {
                    let code = value
                        .as_i64()
                        .and_then(|n| i32::try_from(n).ok())
                        .ok_or_else(|| format!("`{ERROR_CODE}` must be a 32-bit integer"))?;
                    data.error_code = Some(code);
                },
                INNER_ERROR => match value {
                    Value::Object(inner) => data.inner_error = Some(Error::from_wire_object(inner)?),
                    _ => return Err(format!("`{INNER_ERROR}` must be an object")),
                },
                _ => data.extensions.insert(key, value),
            }
        }

        Ok(Error::from_data(data))
    }
}

fn expect_string(field: &str, value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(format!("`{field}` must be a string")),
    }
}
