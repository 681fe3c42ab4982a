//! 宏工具函数

use proc_macro2::Span;
use syn::{Generics, Ident};

/// 生成安装函数名称，例如 `SystemClock` -> `__install_kit_system_clock`
pub fn installer_ident(ident: &Ident) -> Ident {
    Ident::new(
        &format!("__install_kit_{}", to_snake_case(&ident.to_string())),
        Span::call_site(),
    )
}

/// 驼峰转蛇形
pub fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                snake.push('_');
            }
            snake.extend(ch.to_lowercase());
        } else {
            snake.push(ch);
        }
    }
    snake
}

/// 是否带有泛型参数
pub fn has_generics(generics: &Generics) -> bool {
    !generics.params.is_empty()
}
