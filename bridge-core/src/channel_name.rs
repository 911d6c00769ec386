//! 通道名（ChannelName）
//!
//! 无标识、以值相等为准的值对象，封装通道名的不可变值与校验逻辑。
//! 形如 `com.example.app/refresh`：反向域名命名空间 + `/` + 功能后缀，
//! 用于在同一宿主内区分多条方法通道。
//!
use crate::error::{ChannelError, ChannelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 通道名：`<namespace>/<feature>`
///
/// - `namespace`：一个或多个以 `.` 分隔的非空段（建议反向域名）；
/// - `feature`：非空功能后缀，不含 `/`；
/// - 校验失败返回 [`ChannelError::InvalidChannelName`]。
///
/// # 示例
///
/// ```
/// use bridge_core::ChannelName;
///
/// let name: ChannelName = "com.crow.school_schedule/refresh".parse().unwrap();
/// assert_eq!(name.namespace(), "com.crow.school_schedule");
/// assert_eq!(name.feature(), "refresh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelName(String);

impl ChannelName {
    /// 解析并校验通道名
    pub fn parse(raw: impl Into<String>) -> ChannelResult<Self> {
        let raw = raw.into();

        let Some((namespace, feature)) = raw.split_once('/') else {
            return Err(ChannelError::invalid_channel_name(format!(
                "missing '/' separator: {raw:?}"
            )));
        };

        if namespace.is_empty() || namespace.split('.').any(str::is_empty) {
            return Err(ChannelError::invalid_channel_name(format!(
                "namespace must be non-empty dot-separated segments: {raw:?}"
            )));
        }

        if feature.is_empty() {
            return Err(ChannelError::invalid_channel_name(format!(
                "feature suffix must be non-empty: {raw:?}"
            )));
        }

        if feature.contains('/') {
            return Err(ChannelError::invalid_channel_name(format!(
                "feature suffix must not contain '/': {raw:?}"
            )));
        }

        Ok(Self(raw))
    }

    /// 命名空间部分（`/` 之前）
    pub fn namespace(&self) -> &str {
        // parse 保证恰好存在一个分隔符
        self.0.split_once('/').map(|(ns, _)| ns).unwrap_or(&self.0)
    }

    /// 功能后缀部分（`/` 之后）
    pub fn feature(&self) -> &str {
        self.0.split_once('/').map(|(_, f)| f).unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChannelName {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ChannelName {
    type Error = ChannelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ChannelName> for String {
    fn from(value: ChannelName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reverse_domain_plus_feature() {
        let name = ChannelName::parse("com.crow.school_schedule/refresh").unwrap();
        assert_eq!(name.namespace(), "com.crow.school_schedule");
        assert_eq!(name.feature(), "refresh");
        assert_eq!(name.to_string(), "com.crow.school_schedule/refresh");
    }

    #[test]
    fn single_segment_namespace_is_allowed() {
        let name = ChannelName::parse("app/refresh").unwrap();
        assert_eq!(name.namespace(), "app");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = ChannelName::parse("com.example.refresh").unwrap_err();
        assert!(matches!(err, ChannelError::InvalidChannelName { .. }));
    }

    #[test]
    fn rejects_empty_namespace_segment() {
        assert!(ChannelName::parse("com..app/refresh").is_err());
        assert!(ChannelName::parse("/refresh").is_err());
    }

    #[test]
    fn rejects_empty_or_nested_feature() {
        assert!(ChannelName::parse("com.example.app/").is_err());
        assert!(ChannelName::parse("com.example.app/a/b").is_err());
    }

    #[test]
    fn from_str_and_serde_are_transparent() {
        let name: ChannelName = "com.example.app/refresh".parse().unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"com.example.app/refresh\"");
        let back: ChannelName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn deserialization_revalidates() {
        assert!(serde_json::from_str::<ChannelName>("\"no-separator\"").is_err());
    }
}
