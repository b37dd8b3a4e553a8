use std::sync::Arc;

/// Boxed single-argument function, the link type of a curried chain.
pub type Unary<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

/// Turn a two-argument function into a chain of single-argument functions.
///
/// Every application captures its own copy of the argument, so partially
/// applied functions can be reused independently.
pub fn curry2<A, B, R, F>(f: F) -> Unary<A, Unary<B, R>>
where
    F: Fn(A, B) -> R + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
    B: 'static,
    R: 'static,
{
    let f = Arc::new(f);
    Box::new(move |a: A| {
        let f = Arc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b)) as Unary<B, R>
    })
}

pub fn curry3<A, B, C, R, F>(f: F) -> Unary<A, Unary<B, Unary<C, R>>>
where
    F: Fn(A, B, C) -> R + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: 'static,
    R: 'static,
{
    let f = Arc::new(f);
    Box::new(move |a: A| {
        let f = Arc::clone(&f);
        Box::new(move |b: B| {
            let f = Arc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c)) as Unary<C, R>
        }) as Unary<B, Unary<C, R>>
    })
}

/// Apply a curried chain to both arguments at once.
pub fn uncurry2<A, B, R, F, G>(f: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> G,
    G: Fn(B) -> R,
{
    move |a, b| f(a)(b)
}

pub fn uncurry3<A, B, C, R, F, G, H>(f: F) -> impl Fn(A, B, C) -> R
where
    F: Fn(A) -> G,
    G: Fn(B) -> H,
    H: Fn(C) -> R,
{
    move |a, b, c| f(a)(b)(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(l: u32, w: u32, h: u32) -> u32 {
        l * w * h
    }

    #[test]
    fn curried_matches_direct_call() {
        let add = curry2(|a: i32, b: i32| a + b);
        assert_eq!(add(3)(4), 3 + 4);

        let vol = curry3(volume);
        assert_eq!(vol(2)(3)(4), volume(2, 3, 4));
    }

    #[test]
    fn partial_applications_are_independent() {
        let concat = curry3(|a: String, b: String, c: String| format!("{a}{b}{c}"));
        let with_a = concat("a".to_string());
        let ab = with_a("b".to_string());
        let ax = with_a("x".to_string());

        assert_eq!(ab("c".to_string()), "abc");
        assert_eq!(ax("y".to_string()), "axy");
        assert_eq!(ab("d".to_string()), "abd");
    }

    #[test]
    fn uncurry_restores_the_original_shape() {
        let add = uncurry2(curry2(|a: i32, b: i32| a - b));
        assert_eq!(add(10, 4), 6);

        let vol = uncurry3(curry3(volume));
        assert_eq!(vol(1, 2, 3), 6);
    }
}
