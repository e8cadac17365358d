/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
The prompt is ` ? `. Anything other than a 32-bit signed integer
prints `INVALID NUMBER` and asks again. The accepted number is echoed.
At the end of input the variable is left alone and the program goes on.

## Example
```text
10 INPUT A
20 PRINT A * 2
RUN
 ? six
INVALID NUMBER
 ? 6
6
12
```

*/
