/// 定义安全的 i64 路径参数提取器
///
/// 路径参数不是合法正整数时返回 400，而不是 404 或 500。
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl ::actix_web::FromRequest for $name {
            type Error = ::actix_web::Error;
            type Future = ::futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &::actix_web::HttpRequest,
                _payload: &mut ::actix_web::dev::Payload,
            ) -> Self::Future {
                let result = req
                    .match_info()
                    .get($param)
                    .ok_or_else(|| {
                        ::actix_web::error::ErrorBadRequest(concat!(
                            "Missing ",
                            $param,
                            " path parameter"
                        ))
                    })
                    .and_then(|raw| {
                        raw.parse::<i64>().map_err(|_| {
                            ::actix_web::error::ErrorBadRequest(format!(
                                "Invalid {}: {raw}",
                                $param
                            ))
                        })
                    })
                    .and_then(|id| {
                        if id > 0 {
                            Ok($name(id))
                        } else {
                            Err(::actix_web::error::ErrorBadRequest("Id must be positive"))
                        }
                    });
                ::futures_util::future::ready(result)
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
