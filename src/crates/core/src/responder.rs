//! Keyword-matched canned responses.
//!
//! The "AI" of the demo: an ordered rule list tested against the
//! lower-cased input, first match wins, no scoring. Some handlers run a
//! nested secondary substring test to pick among sub-templates. Callers
//! filter empty input before dispatching.

/// One dispatch rule: the primary trigger tokens and the handler that
/// produces the response (which may inspect the input again for a
/// secondary token).
pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub respond: fn(lower_input: &str) -> &'static str,
}

impl KeywordRule {
    pub fn matches(&self, lower_input: &str) -> bool {
        self.triggers.iter().any(|t| lower_input.contains(t))
    }
}

/// Walk `rules` in order and return the first matching handler's output,
/// or `fallback` when nothing matches. Strictly order-sensitive.
pub fn dispatch(rules: &[KeywordRule], input: &str, fallback: &'static str) -> &'static str {
    debug_assert!(!input.trim().is_empty(), "empty input is filtered upstream");
    let lower = input.to_lowercase();
    for rule in rules {
        if rule.matches(&lower) {
            return (rule.respond)(&lower);
        }
    }
    fallback
}

/// Assistant reply for the chat panel.
pub fn assistant_response(input: &str) -> &'static str {
    dispatch(ASSISTANT_RULES, input, ASSISTANT_FALLBACK)
}

pub const ASSISTANT_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["optimize", "improve"],
        respond: |_| OPTIMIZE_RESPONSE,
    },
    KeywordRule {
        triggers: &["explain", "how"],
        respond: |_| EXPLAIN_RESPONSE,
    },
    KeywordRule {
        triggers: &["error", "bug"],
        respond: |_| ERROR_RESPONSE,
    },
    KeywordRule {
        triggers: &["generate", "create"],
        respond: |lower| {
            // Secondary lookup selects the sub-template.
            if lower.contains("component") || lower.contains("button") {
                GENERATE_COMPONENT_RESPONSE
            } else if lower.contains("form") {
                GENERATE_FORM_RESPONSE
            } else {
                GENERATE_GENERIC_RESPONSE
            }
        },
    },
    KeywordRule {
        triggers: &["document", "comment"],
        respond: |_| DOCUMENT_RESPONSE,
    },
];

const OPTIMIZE_RESPONSE: &str = "I analyzed your code and found a potential optimization. The loop in function calculateData() has an O(n\u{b2}) complexity. You can reduce it to O(n) by using a hashmap to store intermediate results:\n\n```javascript\nfunction calculateData(data) {\n  const cache = new Map();\n\n  return data.map(item => {\n    if (cache.has(item.id)) {\n      return cache.get(item.id);\n    }\n\n    const result = /* computation */;\n    cache.set(item.id, result);\n    return result;\n  });\n}\n```\n\nThis approach avoids recalculating results for items with the same ID.";

const EXPLAIN_RESPONSE: &str = "This code implements a binary search algorithm. It works by repeatedly dividing the search interval in half:\n\n```javascript\nfunction binarySearch(arr, target) {\n  let left = 0;\n  let right = arr.length - 1;\n\n  while (left <= right) {\n    const mid = Math.floor((left + right) / 2);\n\n    if (arr[mid] === target) {\n      return mid; // Target found\n    }\n\n    if (arr[mid] < target) {\n      left = mid + 1; // Search in right half\n    } else {\n      right = mid - 1; // Search in left half\n    }\n  }\n\n  return -1; // Target not found\n}\n```\n\nThe time complexity is O(log n), which is much faster than linear search for large arrays.";

const ERROR_RESPONSE: &str = "I detected an issue in your code. On line 47, you're trying to access an array element that might be out of bounds:\n\n```javascript\n// Original code (potentially buggy)\nconst item = array[index];\n\n// Fixed version with boundary check\nif (index >= 0 && index < array.length) {\n  const item = array[index];\n  // Process item\n} else {\n  console.error('Index out of bounds:', index);\n}\n```\n\nAlways check array bounds before accessing elements to avoid runtime errors.";

const GENERATE_COMPONENT_RESPONSE: &str = "Here's a React component based on your request:\n\n```jsx\nimport React, { useState } from 'react';\n\ninterface ButtonProps {\n  text: string;\n  variant?: 'primary' | 'secondary' | 'danger';\n  size?: 'small' | 'medium' | 'large';\n  onClick?: () => void;\n  disabled?: boolean;\n}\n\nconst Button: React.FC<ButtonProps> = ({\n  text,\n  variant = 'primary',\n  size = 'medium',\n  onClick,\n  disabled = false\n}) => {\n  const classes = buildClasses(variant, size, disabled);\n\n  return (\n    <button className={classes} onClick={onClick} disabled={disabled}>\n      {text}\n    </button>\n  );\n};\n\nexport default Button;\n```\n\nThis component is fully typed with TypeScript and includes hover effects, multiple variants, and size options.";

const GENERATE_FORM_RESPONSE: &str = "Here's a React login form component with validation:\n\n```jsx\nimport React, { useState } from 'react';\n\nconst LoginForm = () => {\n  const [formData, setFormData] = useState({ email: '', password: '' });\n  const [errors, setErrors] = useState({ email: '', password: '' });\n  const [isSubmitting, setIsSubmitting] = useState(false);\n\n  const validate = () => {\n    const newErrors = { email: '', password: '' };\n    if (!formData.email) newErrors.email = 'Email is required';\n    if (formData.password.length < 6) {\n      newErrors.password = 'Password must be at least 6 characters';\n    }\n    setErrors(newErrors);\n    return !newErrors.email && !newErrors.password;\n  };\n\n  const handleSubmit = async (e) => {\n    e.preventDefault();\n    if (validate()) {\n      setIsSubmitting(true);\n      await submitLogin(formData);\n      setIsSubmitting(false);\n    }\n  };\n\n  return <form onSubmit={handleSubmit}>{/* fields */}</form>;\n};\n\nexport default LoginForm;\n```\n\nThis form includes email and password validation, loading states, and error handling.";

const GENERATE_GENERIC_RESPONSE: &str = "I've generated the code based on your request. Here's a simple implementation:\n\n```javascript\n// Basic structure\nconst data = [\n  { id: 1, name: 'Item 1', value: 42 },\n  { id: 2, name: 'Item 2', value: 23 },\n  { id: 3, name: 'Item 3', value: 67 }\n];\n\nfunction processData(items) {\n  return items.map(item => ({\n    ...item,\n    processed: true,\n    score: item.value * 1.5\n  }));\n}\n\nconst result = processData(data);\nconsole.log(result);\n```\n\nYou can customize this further based on your specific requirements.";

const DOCUMENT_RESPONSE: &str = "I've added detailed documentation to your code:\n\n```javascript\n/**\n * Calculates the Fibonacci sequence up to the nth number.\n *\n * @param {number} n - The position in the sequence to calculate up to.\n * @returns {number[]} The Fibonacci sequence up to the nth number.\n * @throws {Error} If n is negative or not an integer.\n *\n * @example\n * // returns [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]\n * fibonacci(10);\n */\nfunction fibonacci(n) {\n  if (n < 0 || !Number.isInteger(n)) {\n    throw new Error('Input must be a non-negative integer');\n  }\n  if (n === 0) return [0];\n  if (n === 1) return [0, 1];\n\n  const sequence = [0, 1];\n  for (let i = 2; i < n; i++) {\n    sequence.push(sequence[i - 1] + sequence[i - 2]);\n  }\n  return sequence;\n}\n```\n\nThis documentation follows JSDoc standards and includes a description, parameter details, return value, exceptions, and an example.";

pub const ASSISTANT_FALLBACK: &str = "I'm analyzing your code to provide insights. I notice you're using a recursive approach for this problem. Consider using memoization to improve performance for repeated calculations:\n\n```javascript\nfunction memoizedFunction(fn) {\n  const cache = new Map();\n\n  return function(...args) {\n    const key = JSON.stringify(args);\n    if (cache.has(key)) {\n      return cache.get(key);\n    }\n    const result = fn.apply(this, args);\n    cache.set(key, result);\n    return result;\n  };\n}\n```\n\nThis technique can significantly speed up functions that are called repeatedly with the same arguments.";
