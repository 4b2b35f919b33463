use serde::Serialize;

/// 业务错误码
///
/// 0 表示成功；1xxx 通用；2xxx 用户；3xxx 认证与令牌；
/// 4xxx 科目与班组；5xxx 课次与考勤；6xxx 媒体文件。
/// 令牌错误（过期/格式错误/已吊销/类型不符）各占一码，调用方可区分处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1001,
    Unauthorized = 1002,
    PermissionDenied = 1003,
    NotFound = 1004,
    InternalServerError = 1500,

    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserEmailRequired = 2003,
    UserEmailInvalid = 2004,
    UserNameInvalid = 2005,
    UserCreationFailed = 2006,
    UserProtected = 2007,
    SuperuserFlagsRequired = 2008,

    AuthFailed = 3001,
    TokenExpired = 3002,
    TokenMalformed = 3003,
    TokenRevoked = 3004,
    TokenWrongType = 3005,

    SubjectNotFound = 4001,
    SubjectAlreadyExists = 4002,
    GroupNotFound = 4101,
    GroupAlreadyExists = 4102,
    GroupTeacherInvalid = 4103,
    TeacherProtected = 4104,
    GroupStudentInvalid = 4105,

    LessonNotFound = 5001,
    GroupProtected = 5002,
    LessonProtected = 5003,
    AttendanceNotFound = 5101,
    AttendanceStudentInvalid = 5102,

    MediaInvalid = 6001,
    MediaTooLarge = 6002,
    MediaNotFound = 6003,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_codes_are_distinct() {
        let codes = [
            ErrorCode::TokenExpired as i32,
            ErrorCode::TokenMalformed as i32,
            ErrorCode::TokenRevoked as i32,
            ErrorCode::TokenWrongType as i32,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_success_is_zero() {
        assert_eq!(ErrorCode::Success as i32, 0);
    }
}
